/// Kana for each consonant group, one row per group, columns a/i/u/e/o.
pub const HIRAGANA_CSV: &str = include_str!("hiragana.csv");
/// Baseline romanization, row- and column-aligned with [`HIRAGANA_CSV`].
pub const ROMANIZATION_CSV: &str = include_str!("romanization.csv");
