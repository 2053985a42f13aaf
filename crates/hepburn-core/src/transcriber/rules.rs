use std::collections::HashSet;

use tracing::trace;

use super::word::Word;
use crate::mora::MoraTable;
use crate::options::LongVowel;
use crate::unicode::{is_plain_vowel, is_small_glide, HATSUON, SOKUON};

/// What the rule scan emitted at one position of a word.
///
/// Rules are tried in declaration order; the first that applies wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Position already folded into an earlier rule's output.
    NoMatch,
    /// ん, with an apostrophe before a vowel or n-row mora.
    Nasal(String),
    /// Mora + following plain vowel written as one long vowel.
    LongVowel(String),
    /// っ + mora with the consonant doubled.
    Geminate(String),
    /// Mora + small glide.
    Palatalized(String),
    /// Direct table lookup.
    Fallback(String),
}

impl RuleOutcome {
    pub fn text(&self) -> &str {
        match self {
            RuleOutcome::NoMatch => "",
            RuleOutcome::Nasal(s)
            | RuleOutcome::LongVowel(s)
            | RuleOutcome::Geminate(s)
            | RuleOutcome::Palatalized(s)
            | RuleOutcome::Fallback(s) => s,
        }
    }
}

/// Digraph onset of a palatalizing sibilant or affricate: "shi" → "sh",
/// "chi" → "ch", "ji" → "j". Other mora palatalize with their first letter
/// plus the full glide.
fn sibilant_onset(fragment: &str) -> Option<&str> {
    fragment
        .strip_suffix('i')
        .filter(|onset| matches!(*onset, "sh" | "ch" | "j"))
}

/// Per-word scan state. Positions index into the word, so repeated identical
/// mora are tracked independently.
pub(super) struct Scan<'a> {
    table: &'a MoraTable,
    word: &'a Word,
    long_vowel: LongVowel,
    /// Positions already emitted by a multi-mora rule.
    consumed: HashSet<usize>,
}

impl<'a> Scan<'a> {
    pub(super) fn new(table: &'a MoraTable, word: &'a Word, long_vowel: LongVowel) -> Self {
        Self {
            table,
            word,
            long_vowel,
            consumed: HashSet::new(),
        }
    }

    pub(super) fn run(mut self) -> String {
        if self.word.len() == 1 {
            return self.fragment(0).to_string();
        }
        let mut out = String::new();
        for pos in 0..self.word.len() {
            let outcome = self.step(pos);
            trace!(pos, mora = &self.word[pos], ?outcome);
            out.push_str(outcome.text());
        }
        out
    }

    /// Apply the first matching rule at `pos` and record what it consumed.
    pub(super) fn step(&mut self, pos: usize) -> RuleOutcome {
        if let Some(text) = self.nasal(pos) {
            self.consumed.insert(pos);
            return RuleOutcome::Nasal(text);
        }
        if let Some(text) = self.lengthened(pos) {
            self.consumed.extend([pos, pos + 1]);
            return RuleOutcome::LongVowel(text);
        }
        if let Some((text, claims_next)) = self.geminate(pos) {
            if claims_next {
                self.consumed.insert(pos + 1);
            }
            return RuleOutcome::Geminate(text);
        }
        if let Some(text) = self.palatalized(pos) {
            self.consumed.extend([pos, pos + 1]);
            return RuleOutcome::Palatalized(text);
        }
        if self.consumed.contains(&pos) {
            RuleOutcome::NoMatch
        } else {
            RuleOutcome::Fallback(self.fragment(pos).to_string())
        }
    }

    /// Romanized fragment of the mora at `pos`.
    fn fragment(&self, pos: usize) -> &'a str {
        self.table.get(&self.word[pos]).unwrap_or("")
    }

    fn next(&self, pos: usize) -> Option<&'a str> {
        self.word.get(pos + 1)
    }

    fn nasal(&self, pos: usize) -> Option<String> {
        if &self.word[pos] != HATSUON {
            return None;
        }
        let plain = self.fragment(pos);
        if self.next(pos).is_none() {
            return Some(plain.to_string());
        }
        let following = self.fragment(pos + 1);
        if following.chars().count() == 1 || following.starts_with('n') {
            Some(format!("{plain}'"))
        } else {
            Some(plain.to_string())
        }
    }

    fn lengthened(&self, pos: usize) -> Option<String> {
        if !is_plain_vowel(self.next(pos)?) {
            return None;
        }
        let current = self.fragment(pos);
        let vowel = current.chars().last()?;
        let following = self.fragment(pos + 1).chars().last()?;
        if vowel == following || (vowel == 'o' && following == 'u') {
            Some(self.long_vowel.extend(current))
        } else {
            None
        }
    }

    /// Doubled consonant for っ. The bool says whether the following mora is
    /// claimed too; it is left alone when it opens a sequence of its own.
    fn geminate(&self, pos: usize) -> Option<(String, bool)> {
        if &self.word[pos] != SOKUON {
            return None;
        }
        self.next(pos)?;
        let following = self.fragment(pos + 1);
        let onset = following.chars().next()?;
        if self.opens_sequence(pos + 1) {
            Some((onset.to_string(), false))
        } else {
            Some((format!("{onset}{following}"), true))
        }
    }

    fn opens_sequence(&self, pos: usize) -> bool {
        self.nasal(pos).is_some()
            || self.lengthened(pos).is_some()
            || self.palatalized(pos).is_some()
    }

    /// Mora + small glide. Before a long vowel only the onset is emitted;
    /// the glide carries the long vowel itself.
    fn palatalized(&self, pos: usize) -> Option<String> {
        if !is_small_glide(self.next(pos)?) {
            return None;
        }
        let current = self.fragment(pos);
        let glide = self.fragment(pos + 1);
        let long_follows = self.lengthened(pos + 1).is_some();

        if let Some(onset) = sibilant_onset(current) {
            if long_follows {
                return Some(onset.to_string());
            }
            return Some(format!("{onset}{}", glide.strip_prefix('y').unwrap_or(glide)));
        }

        let onset = current.chars().next().map(String::from).unwrap_or_default();
        if long_follows {
            Some(onset)
        } else {
            Some(format!("{onset}{glide}"))
        }
    }
}
