//! Game state and secret word selection
//!
//! Everything that must survive a save/resume cycle lives here.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::dictionary::candidates;
use crate::error::{HangmanError, Result};

/// Complete game state (serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Word the player is trying to reveal
    pub secret_word: String,
    /// Letters tried so far, in guess order
    pub guessed_letters: Vec<char>,
    /// Guessed letters not present in the secret word
    pub incorrect_guesses: u32,
    /// Incorrect guesses allowed before the game is lost
    pub max_attempts: u32,
}

impl GameState {
    /// Start a fresh game around a known secret word
    pub fn new(secret_word: impl Into<String>) -> Self {
        Self {
            secret_word: secret_word.into().to_lowercase(),
            guessed_letters: Vec::new(),
            incorrect_guesses: 0,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Start a fresh game, picking the secret word uniformly from the
    /// eligible dictionary entries.
    pub fn create_new<S, R>(words: &[S], rng: &mut R) -> Result<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let pool = candidates(words);
        let word = pool.choose(rng).ok_or(HangmanError::DictionaryEmpty)?;
        log::debug!("Picked secret word from {} candidates", pool.len());
        Ok(Self::new(word.as_str()))
    }

    /// Rebuild a game verbatim from a snapshot.
    ///
    /// Only the presence and shape of the four fields is checked; the values
    /// themselves are trusted.
    pub fn restore(snapshot: serde_json::Value) -> Result<Self> {
        serde_json::from_value(snapshot).map_err(|e| HangmanError::CorruptSave(e.to_string()))
    }

    /// Serializable copy of this state, the inverse of [`GameState::restore`]
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "secret_word": self.secret_word,
            "guessed_letters": self.guessed_letters,
            "incorrect_guesses": self.incorrect_guesses,
            "max_attempts": self.max_attempts,
        })
    }

    /// Whether `letter` has already been tried
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }
}
