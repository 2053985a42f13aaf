//! Optional JSON trace sink for the transcription spans.
//!
//! With the `trace` feature, `init_tracing` writes one JSON object per event
//! and per closed `transcribe`/`transcribe_word` span to
//! `log_dir/hepburn-trace.jsonl`. The filter comes from `HEPBURN_LOG` and
//! defaults to `hepburn_core=debug`; per-mora rule outcomes need `trace`.
//! Without the feature it does nothing.

use std::path::Path;

/// Environment variable holding the trace filter directives.
pub const FILTER_ENV: &str = "HEPBURN_LOG";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "hepburn_core=debug";

/// Install the trace subscriber. Returns whether this call installed it;
/// a process already holding a global subscriber keeps it.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> bool {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let appender = tracing_appender::rolling::never(log_dir, "hepburn-trace.jsonl");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .with_env_filter(filter)
        .try_init()
        .is_ok();
    if installed {
        // The writer thread must outlive every span the host records.
        std::mem::forget(guard);
    }
    installed
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> bool {
    false
}
