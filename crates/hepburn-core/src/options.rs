//! Transcription options, following the same OnceLock pattern as the mora table.
//!
//! - `init_custom(toml_content)` sets custom defaults before first `defaults()` call
//! - `defaults()` returns `&'static Options` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_options.toml")`

use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::ArgumentError;

pub const DEFAULT_OPTIONS_TOML: &str = include_str!("default_options.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Options> = OnceLock::new();

/// Set custom default options before first `defaults()` call.
pub fn init_custom(toml_content: String) -> Result<(), ArgumentError> {
    Options::from_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(ArgumentError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| ArgumentError::AlreadyInitialized)
}

/// Get or initialize the global default options.
pub fn defaults() -> &'static Options {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_OPTIONS_TOML);
        Options::from_toml(toml_str).expect("options TOML must be valid")
    })
}

/// How a long vowel is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LongVowel {
    /// Combining macron over the vowel: ō
    Macron,
    /// Trailing "h": oh
    H,
    /// Trailing "u": ou
    Native,
}

impl LongVowel {
    /// Lengthen the final vowel of `fragment`.
    pub fn extend(self, fragment: &str) -> String {
        let mut out = String::with_capacity(fragment.len() + 2);
        out.push_str(fragment);
        match self {
            LongVowel::Macron => out.push('\u{0304}'),
            LongVowel::H => out.push('h'),
            LongVowel::Native => out.push('u'),
        }
        out
    }
}

impl FromStr for LongVowel {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "macron" => Ok(LongVowel::Macron),
            "h" => Ok(LongVowel::H),
            "native" => Ok(LongVowel::Native),
            other => Err(ArgumentError::InvalidLongVowel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub long_vowel: LongVowel,
}

impl Options {
    pub fn new(long_vowel: LongVowel) -> Self {
        Self { long_vowel }
    }

    /// Parse options from TOML. Unknown keys are rejected; a missing
    /// `long_vowel` means macron.
    pub fn from_toml(toml_str: &str) -> Result<Self, ArgumentError> {
        let table: toml::Table = toml_str
            .parse()
            .map_err(|e: toml::de::Error| ArgumentError::Parse(e.message().to_string()))?;

        let mut options = Self::new(LongVowel::Macron);
        for (key, value) in &table {
            match (key.as_str(), value) {
                ("long_vowel", toml::Value::String(s)) => options.long_vowel = s.parse()?,
                ("long_vowel", other) => {
                    return Err(ArgumentError::InvalidLongVowel(other.to_string()))
                }
                (other, _) => return Err(ArgumentError::UnknownOption(other.to_string())),
            }
        }
        Ok(options)
    }

    /// Build options from `(key, value)` pairs on top of `defaults()`.
    ///
    /// `long_vowel` is the only recognized key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = *defaults();
        for (key, value) in pairs {
            match key.as_ref() {
                "long_vowel" => options.long_vowel = value.as_ref().parse()?,
                other => return Err(ArgumentError::UnknownOption(other.to_string())),
            }
        }
        Ok(options)
    }
}

impl Default for Options {
    fn default() -> Self {
        *defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let o = Options::from_toml(DEFAULT_OPTIONS_TOML).unwrap();
        assert_eq!(o.long_vowel, LongVowel::Macron);
        assert_eq!(Options::default(), o);
    }

    #[test]
    fn parse_each_mode() {
        for (name, mode) in [
            ("macron", LongVowel::Macron),
            ("h", LongVowel::H),
            ("native", LongVowel::Native),
        ] {
            let o = Options::from_toml(&format!("long_vowel = \"{name}\"")).unwrap();
            assert_eq!(o.long_vowel, mode);
            assert_eq!(name.parse::<LongVowel>().unwrap(), mode);
        }
    }

    #[test]
    fn parse_empty_toml_is_macron() {
        let o = Options::from_toml("").unwrap();
        assert_eq!(o.long_vowel, LongVowel::Macron);
    }

    #[test]
    fn deserialize_mode_from_host_config() {
        #[derive(Deserialize)]
        struct HostConfig {
            romanization: LongVowel,
        }
        let c: HostConfig = toml::from_str("romanization = \"native\"").unwrap();
        assert_eq!(c.romanization, LongVowel::Native);
        assert!(toml::from_str::<HostConfig>("romanization = \"Native\"").is_err());
    }

    #[test]
    fn error_init_after_defaults() {
        defaults();
        let err = init_custom(DEFAULT_OPTIONS_TOML.to_string()).unwrap_err();
        assert_eq!(err, ArgumentError::AlreadyInitialized);
    }

    #[test]
    fn error_invalid_mode() {
        let err = Options::from_toml("long_vowel = \"romaji\"").unwrap_err();
        assert_eq!(err, ArgumentError::InvalidLongVowel("romaji".into()));
        assert!("Macron".parse::<LongVowel>().is_err());
    }

    #[test]
    fn error_unknown_key() {
        let err = Options::from_toml("long_vowel = \"h\"\nstyle = \"kunrei\"").unwrap_err();
        assert_eq!(err, ArgumentError::UnknownOption("style".into()));
    }

    #[test]
    fn error_non_string_mode() {
        let err = Options::from_toml("long_vowel = 1").unwrap_err();
        assert!(matches!(err, ArgumentError::InvalidLongVowel(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = Options::from_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, ArgumentError::Parse(_)));
    }

    #[test]
    fn pairs_override_defaults() {
        let o = Options::from_pairs([("long_vowel", "native")]).unwrap();
        assert_eq!(o.long_vowel, LongVowel::Native);
        let o = Options::from_pairs(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(o, *defaults());
    }

    #[test]
    fn pairs_reject_unknown_key() {
        let err = Options::from_pairs([("long_vowel", "h"), ("strict", "yes")]).unwrap_err();
        assert_eq!(err, ArgumentError::UnknownOption("strict".into()));
    }

    #[test]
    fn pairs_reject_invalid_mode() {
        let err = Options::from_pairs([("long_vowel", "romaji")]).unwrap_err();
        assert_eq!(err, ArgumentError::InvalidLongVowel("romaji".into()));
    }

    #[test]
    fn extend_modes() {
        assert_eq!(LongVowel::Macron.extend("ko"), "ko\u{0304}");
        assert_eq!(LongVowel::H.extend("ko"), "koh");
        assert_eq!(LongVowel::Native.extend("ko"), "kou");
        // "u" regardless of which vowel is lengthened
        assert_eq!(LongVowel::Native.extend("ka"), "kau");
        assert_eq!(LongVowel::Native.extend("i"), "iu");
    }
}
