//! Errors reported by the transcription entry points.

/// Rejected call arguments: no input, or malformed options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("no input given")]
    NoInput,
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("invalid long_vowel value {0:?} (expected \"macron\", \"h\" or \"native\")")]
    InvalidLongVowel(String),
    #[error("options TOML parse error: {0}")]
    Parse(String),
    #[error("default options already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscribeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// A mora outside the table, including a voicing mark with no base to
    /// attach to. The whole word is rejected.
    #[error("invalid character {character:?} in {word:?}")]
    InvalidCharacter { word: String, character: String },
}
