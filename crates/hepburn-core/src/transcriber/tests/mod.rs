mod properties;

use super::*;

/// Transcribe one word on the global table.
fn romanize(kana: &str, long_vowel: LongVowel) -> String {
    Transcriber::global()
        .transcribe_word(kana, long_vowel)
        .unwrap()
}

fn macron(kana: &str) -> String {
    romanize(kana, LongVowel::Macron)
}
