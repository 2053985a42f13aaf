//! Hiragana mora → Hepburn fragment table.
//!
//! Built from two row-aligned sources (kana and romanization) plus the
//! derived voiced, semi-voiced, small-glide and marker entries. The table is
//! immutable once built; `MoraTable::global()` builds it once per process.

mod data;
mod source;
mod table;

pub use data::{HIRAGANA_CSV, ROMANIZATION_CSV};
pub use source::{parse_source, FormatError, SourceRow};
pub use table::MoraTable;
