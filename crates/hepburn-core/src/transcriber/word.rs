use std::ops::Index;

use crate::error::TranscribeError;
use crate::mora::MoraTable;
use crate::unicode::{decompose, is_voicing_mark};

/// A word as a sequence of morae, voicing marks already fused onto their base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    morae: Vec<String>,
    /// Each mora as the caller wrote it, before decomposition.
    written: Vec<String>,
}

impl Word {
    /// Decompose `raw` and fold each voicing mark into the preceding kana.
    ///
    /// A mark with nothing to attach to (leading, or a second mark on the
    /// same base) is kept as its own mora so validation can reject it.
    pub fn fuse(raw: &str) -> Self {
        let mut morae: Vec<String> = Vec::new();
        let mut written: Vec<String> = Vec::new();
        let mut buf = [0u8; 4];
        for raw_ch in raw.chars() {
            // Only the first char of a decomposition starts a new written span.
            let mut fresh = true;
            for ch in decompose(raw_ch.encode_utf8(&mut buf)) {
                if is_voicing_mark(ch) {
                    if let Some(last) = morae.last_mut() {
                        if last.chars().count() == 1 && !last.chars().all(is_voicing_mark) {
                            last.push(ch);
                            if fresh {
                                if let Some(w) = written.last_mut() {
                                    w.push(raw_ch);
                                }
                            }
                            fresh = false;
                            continue;
                        }
                    }
                }
                morae.push(ch.to_string());
                written.push(if fresh { raw_ch.to_string() } else { String::new() });
                fresh = false;
            }
        }
        Self { morae, written }
    }

    /// Check every mora against `table`. Bare voicing marks are rejected even
    /// though the table carries them as markers.
    pub fn validate(&self, raw: &str, table: &MoraTable) -> Result<(), TranscribeError> {
        let invalid = self
            .morae
            .iter()
            .position(|m| !table.contains(m) || m.chars().all(is_voicing_mark));
        match invalid {
            Some(pos) => Err(TranscribeError::InvalidCharacter {
                word: raw.to_string(),
                character: self.written[pos].clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.morae.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morae.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&str> {
        self.morae.get(pos).map(String::as_str)
    }

    /// The mora at `pos` as it appeared in the input.
    pub fn written(&self, pos: usize) -> Option<&str> {
        self.written.get(pos).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.morae.iter().map(String::as_str)
    }
}

impl Index<usize> for Word {
    type Output = str;

    fn index(&self, pos: usize) -> &str {
        &self.morae[pos]
    }
}
