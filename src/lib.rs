//! Hangman - A command-line word guessing game
//!
//! Core modules:
//! - `sim`: Game state machine (word selection, guesses, win/loss)
//! - `dictionary`: Word sources for secret word selection
//! - `persistence`: Single-slot save/load with a versioned JSON envelope
//! - `console`: Line-based terminal abstraction
//! - `session`: Launch menu and interactive guess loop
//! - `settings`: File and environment configuration
//! - `cli`: Command-line arguments

pub mod cli;
pub mod console;
pub mod dictionary;
pub mod error;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{HangmanError, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Shortest secret word allowed
    pub const MIN_WORD_LEN: usize = 5;
    /// Longest secret word allowed
    pub const MAX_WORD_LEN: usize = 12;
    /// Incorrect guesses allowed before the game is lost
    pub const MAX_ATTEMPTS: u32 = 8;

    /// Placeholder shown for letters not yet guessed
    pub const MASK_CHAR: char = '_';
    /// Separator between guessed letters in the HUD line
    pub const GUESS_SEPARATOR: &str = ", ";

    /// In-game command that saves and exits
    pub const SAVE_COMMAND: &str = "save";

    /// Snapshot envelope format version
    pub const SNAPSHOT_VERSION: u32 = 1;
}
