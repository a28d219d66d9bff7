//! Word sources for secret word selection
//!
//! The dictionary is a plain text file, one word per line, read in full when a
//! new game is created.

use std::fs;
use std::path::PathBuf;

use crate::consts::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::error::{HangmanError, Result};

/// Anything that can hand over a list of candidate words
pub trait WordSource {
    fn words(&self) -> Result<Vec<String>>;
}

/// Dictionary backed by a text file on disk
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn words(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path).map_err(|source| HangmanError::Dictionary {
            path: self.path.clone(),
            source,
        })?;
        let words = parse_words(&text);
        log::info!("Loaded {} words from {}", words.len(), self.path.display());
        Ok(words)
    }
}

impl WordSource for Vec<String> {
    fn words(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }
}

/// Split dictionary text into words, one per non-empty line
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lower-cased words eligible to be a secret word: 5 to 12 ASCII letters
pub fn candidates<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| is_eligible(w))
        .collect()
}

fn is_eligible(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.bytes().all(|b| b.is_ascii_lowercase())
}
