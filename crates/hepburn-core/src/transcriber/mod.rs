//! Hiragana-to-Hepburn transduction.
//!
//! Each phrase is split on whitespace; each word is decomposed, its voicing
//! marks fused onto their base kana, validated against the mora table, and
//! then scanned position by position. At every position the first matching
//! rule wins: nasal ん, long vowel, geminate っ, palatalized glide, and
//! finally a plain table lookup for anything not already consumed.

mod rules;
#[cfg(test)]
mod tests;
mod word;

pub use rules::RuleOutcome;
pub use word::Word;

use tracing::{debug, debug_span};

use crate::error::{ArgumentError, TranscribeError};
use crate::mora::MoraTable;
use crate::options::{LongVowel, Options};

use rules::Scan;

/// Romanizes hiragana words against a fixed mora table.
#[derive(Debug, Clone, Copy)]
pub struct Transcriber<'t> {
    table: &'t MoraTable,
}

impl<'t> Transcriber<'t> {
    pub fn new(table: &'t MoraTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t MoraTable {
        self.table
    }

    /// Transcribe every whitespace-separated word of every phrase, in order.
    ///
    /// Fails on empty `inputs` or on the first word holding a character
    /// outside the mora table; no partial output is returned.
    pub fn transcribe<I, S>(&self, inputs: I, options: &Options) -> Result<Vec<String>, TranscribeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases = inputs.into_iter().peekable();
        if phrases.peek().is_none() {
            return Err(ArgumentError::NoInput.into());
        }
        let _span = debug_span!("transcribe", long_vowel = ?options.long_vowel).entered();

        let mut words = Vec::new();
        for phrase in phrases {
            for raw in phrase.as_ref().split_whitespace() {
                words.push(self.transcribe_word(raw, options.long_vowel)?);
            }
        }
        debug!(word_count = words.len());
        Ok(words)
    }

    /// Like [`Transcriber::transcribe`], with options given as raw
    /// `(key, value)` pairs.
    pub fn transcribe_with<I, S, O, K, V>(&self, inputs: I, options: O) -> Result<Vec<String>, TranscribeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        O: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let options = Options::from_pairs(options)?;
        self.transcribe(inputs, &options)
    }

    /// Transcribe a single word. Whitespace inside `raw` is not split.
    pub fn transcribe_word(&self, raw: &str, long_vowel: LongVowel) -> Result<String, TranscribeError> {
        let _span = debug_span!("transcribe_word", raw).entered();
        let word = Word::fuse(raw);
        word.validate(raw, self.table)?;
        if word.is_empty() {
            return Ok(String::new());
        }
        Ok(Scan::new(self.table, &word, long_vowel).run())
    }
}

impl Transcriber<'static> {
    /// Transcriber over the process-wide mora table.
    pub fn global() -> Self {
        Self::new(MoraTable::global())
    }
}

/// [`Transcriber::transcribe`] on the global table.
pub fn transcribe<I, S>(inputs: I, options: &Options) -> Result<Vec<String>, TranscribeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Transcriber::global().transcribe(inputs, options)
}

/// [`Transcriber::transcribe_with`] on the global table.
pub fn transcribe_with<I, S, O, K, V>(inputs: I, options: O) -> Result<Vec<String>, TranscribeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    O: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    Transcriber::global().transcribe_with(inputs, options)
}
