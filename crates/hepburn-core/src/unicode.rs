//! Character-level Unicode classification for hiragana input.

use unicode_normalization::UnicodeNormalization;

/// Combining voiced sound mark (dakuten), U+3099.
pub const DAKUTEN: char = '\u{3099}';
/// Combining semi-voiced sound mark (handakuten), U+309A.
pub const HANDAKUTEN: char = '\u{309A}';
/// Small tsu, the geminate marker.
pub const SOKUON: &str = "っ";
/// Syllabic n.
pub const HATSUON: &str = "ん";
/// Small glides that palatalize the preceding mora.
pub const SMALL_GLIDES: [(char, &str); 3] = [('ゃ', "ya"), ('ゅ', "yu"), ('ょ', "yo")];

/// Combining dakuten or handakuten.
pub fn is_voicing_mark(c: char) -> bool {
    c == DAKUTEN || c == HANDAKUTEN
}

/// Map the spacing voicing marks (゛ U+309B, ゜ U+309C) to their combining forms.
pub fn to_combining_mark(c: char) -> char {
    match c {
        '\u{309B}' => DAKUTEN,
        '\u{309C}' => HANDAKUTEN,
        _ => c,
    }
}

/// One of the five plain vowel kana あいうえお.
pub fn is_plain_vowel(mora: &str) -> bool {
    matches!(mora, "あ" | "い" | "う" | "え" | "お")
}

pub fn is_small_glide(mora: &str) -> bool {
    let mut chars = mora.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => SMALL_GLIDES.iter().any(|&(g, _)| g == c),
        _ => false,
    }
}

/// Split precomposed voiced kana into base + combining mark.
///
/// "が" (U+304C) becomes "か" + U+3099; spacing marks are normalized to
/// combining ones so that "か゛" and "が" read the same.
pub fn decompose(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().map(to_combining_mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_precomposed() {
        let out: String = decompose("がぱ").collect();
        assert_eq!(out, "か\u{3099}は\u{309A}");
    }

    #[test]
    fn test_decompose_spacing_marks() {
        let out: String = decompose("か\u{309B}は\u{309C}").collect();
        assert_eq!(out, "か\u{3099}は\u{309A}");
    }

    #[test]
    fn test_decompose_plain_untouched() {
        let out: String = decompose("さくら").collect();
        assert_eq!(out, "さくら");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_voicing_mark(DAKUTEN));
        assert!(is_voicing_mark(HANDAKUTEN));
        assert!(!is_voicing_mark('\u{309B}'));
    }

    #[test]
    fn test_mora_classification() {
        assert!(is_plain_vowel("お"));
        assert!(!is_plain_vowel("を"));
        assert!(is_small_glide("ょ"));
        assert!(!is_small_glide("よ"));
        assert!(!is_small_glide("ょょ"));
    }
}
