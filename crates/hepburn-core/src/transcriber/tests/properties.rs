//! Property-based tests for the transcription rules.

use proptest::prelude::*;

use super::*;
use crate::unicode::{DAKUTEN, HANDAKUTEN};

/// Unvoiced consonant-row kana: no vowels, ん, っ or glides, so no rule
/// other than the table lookup can fire.
const PLAIN: [&str; 36] = [
    "か", "き", "く", "け", "こ", "さ", "し", "す", "せ", "そ", "た", "ち", "つ", "て", "と", "な",
    "に", "ぬ", "ね", "の", "は", "ひ", "ふ", "へ", "ほ", "ま", "み", "む", "め", "も", "ら", "り",
    "る", "れ", "ろ", "わ",
];

const ANY: [&str; 14] = [
    "あ", "い", "う", "お", "か", "き", "し", "ち", "ん", "っ", "ゃ", "ょ", "が", "ぱ",
];

fn arb_plain_word() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(PLAIN.to_vec()), 1..12)
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ANY.to_vec()), 1..12).prop_map(|m| m.concat())
}

fn arb_long_vowel() -> impl Strategy<Value = LongVowel> {
    prop_oneof![
        Just(LongVowel::Macron),
        Just(LongVowel::H),
        Just(LongVowel::Native),
    ]
}

proptest! {
    #[test]
    fn plain_words_concatenate_lookups(morae in arb_plain_word()) {
        let table = MoraTable::global();
        let expected: String = morae.iter().map(|m| table.get(m).unwrap()).collect();
        prop_assert_eq!(macron(&morae.concat()), expected);
    }

    #[test]
    fn transcription_is_pure(word in arb_word(), mode in arb_long_vowel()) {
        let t = Transcriber::global();
        let first = t.transcribe_word(&word, mode).unwrap();
        let second = t.transcribe_word(&word, mode).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_is_latin(word in arb_word(), mode in arb_long_vowel()) {
        let out = Transcriber::global().transcribe_word(&word, mode).unwrap();
        prop_assert!(
            out.chars().all(|c| c.is_ascii_lowercase() || c == '\'' || c == '\u{304}'),
            "non-latin output {:?}",
            out
        );
    }

    #[test]
    fn one_output_per_word(words in prop::collection::vec(arb_word(), 1..6)) {
        let phrase = words.join(" ");
        let out = transcribe([phrase.as_str()], &Options::new(LongVowel::Macron)).unwrap();
        prop_assert_eq!(out.len(), words.len());
    }
}

#[test]
fn voicing_invariant() {
    let table = MoraTable::global();
    let groups = [
        ("k", "かきくけこ", "ggggg"),
        ("s", "さしすせそ", "zjzzz"),
        ("t", "たちつてと", "djzdd"),
        ("h", "はひふへほ", "bbbbb"),
    ];
    for (group, row, onsets) in groups {
        for (base, onset) in row.chars().zip(onsets.chars()) {
            let voiced = table.get(&format!("{base}{DAKUTEN}")).unwrap();
            assert!(voiced.starts_with(onset), "{group}: {base} voiced to {voiced}");
            let plain = table.get(&base.to_string()).unwrap();
            assert_eq!(voiced.chars().last(), plain.chars().last());
        }
    }
    for base in "はひふへほ".chars() {
        let semi = table.get(&format!("{base}{HANDAKUTEN}")).unwrap();
        assert!(semi.starts_with('p'));
    }
}
