pub mod error;
pub mod mora;
pub mod options;
pub mod trace_init;
pub mod transcriber;
pub mod unicode;

pub use error::{ArgumentError, TranscribeError};
pub use mora::{FormatError, MoraTable};
pub use options::{LongVowel, Options};
pub use transcriber::{transcribe, transcribe_with, Transcriber};
