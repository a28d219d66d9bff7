//! Crate-wide error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort startup or surface from the save slot.
///
/// Per-turn guess validation failures are not errors; see
/// [`crate::sim::GuessRejection`].
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error(
        "no dictionary word between {} and {} letters",
        crate::consts::MIN_WORD_LEN,
        crate::consts::MAX_WORD_LEN
    )]
    DictionaryEmpty,

    #[error("failed to read dictionary '{path}': {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("saved game is corrupt: {0}")]
    CorruptSave(String),

    #[error("failed to encode saved game: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to load settings from '{path}': {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = HangmanError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_is_not_reported_as_io() {
        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        let err = HangmanError::from(json_err);
        assert!(matches!(err, HangmanError::Serialize(_)));
        assert!(err.to_string().starts_with("failed to encode saved game"));
    }
}
