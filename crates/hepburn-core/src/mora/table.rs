use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use super::data::{HIRAGANA_CSV, ROMANIZATION_CSV};
use super::source::{parse_source, FormatError};
use crate::unicode::{DAKUTEN, HANDAKUTEN, SMALL_GLIDES, SOKUON};

static CUSTOM_SOURCES: OnceLock<(String, String)> = OnceLock::new();
static INSTANCE: OnceLock<MoraTable> = OnceLock::new();

/// Group rows every source must provide.
const EXPECTED_GROUPS: [&str; 11] = ["vowel", "k", "s", "t", "n", "h", "m", "y", "r", "w", "nn"];

/// Leading consonant of the dakuten form of `base` in `group`, if it has one.
///
/// Each voiced column has one irregular member: し and ち voice to "j",
/// つ voices to "z".
fn voiced_onset(group: &str, base: char) -> Option<char> {
    match (group, base) {
        ("s", 'し') | ("t", 'ち') => Some('j'),
        ("t", 'つ') => Some('z'),
        ("k", _) => Some('g'),
        ("s", _) => Some('z'),
        ("t", _) => Some('d'),
        ("h", _) => Some('b'),
        _ => None,
    }
}

/// Immutable mapping from mora (1-2 code points) to its romanized fragment.
///
/// Markers (small tsu, the bare voicing marks, space) map to the empty
/// fragment: they are never emitted on their own.
#[derive(Debug, Clone)]
pub struct MoraTable {
    entries: BTreeMap<String, String>,
}

impl MoraTable {
    /// Build the table from the row-aligned kana and romanization sources.
    pub fn build(hiragana: &str, romanization: &str) -> Result<Self, FormatError> {
        let kana_rows = parse_source("hiragana", hiragana)?;
        let latin_rows = parse_source("romanization", romanization)?;
        if kana_rows.len() != latin_rows.len() {
            return Err(FormatError::RowCount {
                hiragana: kana_rows.len(),
                romanization: latin_rows.len(),
            });
        }

        let mut entries = BTreeMap::new();
        for (kana_row, latin_row) in kana_rows.iter().zip(&latin_rows) {
            if kana_row.group != latin_row.group {
                return Err(FormatError::GroupMismatch {
                    line: kana_row.line,
                    hiragana: kana_row.group.clone(),
                    romanization: latin_row.group.clone(),
                });
            }
            let group = kana_row.group.as_str();

            for (i, (kana, latin)) in kana_row.cells.iter().zip(&latin_row.cells).enumerate() {
                let column = i + 2;
                match (kana.is_empty(), latin.is_empty()) {
                    (true, true) => continue,
                    (false, false) => {}
                    _ => {
                        return Err(FormatError::CellMismatch {
                            line: kana_row.line,
                            column,
                        })
                    }
                }
                let mut chars = kana.chars();
                let base = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(FormatError::NotSingleKana {
                            line: kana_row.line,
                            column,
                            cell: kana.clone(),
                        })
                    }
                };
                entries.insert(kana.clone(), latin.clone());

                // Non-empty per the cell check above.
                let vowel = latin.chars().last().unwrap_or_default();
                if let Some(onset) = voiced_onset(group, base) {
                    entries.insert(format!("{base}{DAKUTEN}"), format!("{onset}{vowel}"));
                }
                if group == "h" {
                    entries.insert(format!("{base}{HANDAKUTEN}"), format!("p{vowel}"));
                }
            }
        }

        for group in EXPECTED_GROUPS {
            if !kana_rows.iter().any(|r| r.group == group) {
                return Err(FormatError::MissingGroup(group));
            }
        }

        for (glide, latin) in SMALL_GLIDES {
            entries.insert(glide.to_string(), latin.to_string());
        }
        for marker in [SOKUON.to_string(), DAKUTEN.to_string(), HANDAKUTEN.to_string()] {
            entries.insert(marker, String::new());
        }
        entries.insert(" ".to_string(), String::new());

        Ok(MoraTable { entries })
    }

    /// Set custom sources before the first `global()` call. Fails with
    /// `AlreadyInitialized` once the global table exists.
    pub fn init_custom(hiragana: String, romanization: String) -> Result<(), FormatError> {
        // Validate eagerly
        Self::build(&hiragana, &romanization)?;
        if INSTANCE.get().is_some() {
            return Err(FormatError::AlreadyInitialized);
        }
        CUSTOM_SOURCES
            .set((hiragana, romanization))
            .map_err(|_| FormatError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MoraTable {
        INSTANCE.get_or_init(|| {
            let (hiragana, romanization) = CUSTOM_SOURCES
                .get()
                .map(|(h, r)| (h.as_str(), r.as_str()))
                .unwrap_or((HIRAGANA_CSV, ROMANIZATION_CSV));
            let table = Self::build(hiragana, romanization).expect("mora tables must be valid");
            debug!(entries = table.len(), "mora table built");
            table
        })
    }

    pub fn get(&self, mora: &str) -> Option<&str> {
        self.entries.get(mora).map(String::as_str)
    }

    pub fn contains(&self, mora: &str) -> bool {
        self.entries.contains_key(mora)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All (mora, fragment) pairs, ordered by mora.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
