//! Guess processing, outcome detection and HUD rendering
//!
//! Pure functions over [`GameState`]; no console or storage access.

use thiserror::Error;

use super::state::GameState;
use crate::consts::{GUESS_SEPARATOR, MASK_CHAR};

/// Why a guess was refused. The state is never touched on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("Invalid input. Please guess a single letter.")]
    InvalidInput,
    #[error("You've already guessed that letter!")]
    AlreadyGuessed,
}

/// Result of submitting one line of input as a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Letter recorded; `correct` is whether the secret word contains it
    Accepted { correct: bool },
    /// Input refused, no turn consumed
    Rejected(GuessRejection),
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Validate and apply one guess
pub fn submit_guess(state: &mut GameState, raw_input: &str) -> GuessResult {
    let input = raw_input.to_lowercase();

    let mut chars = input.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => c,
        _ => return GuessResult::Rejected(GuessRejection::InvalidInput),
    };

    if state.has_guessed(letter) {
        return GuessResult::Rejected(GuessRejection::AlreadyGuessed);
    }

    state.guessed_letters.push(letter);

    let correct = state.secret_word.contains(letter);
    if !correct {
        state.incorrect_guesses = state.incorrect_guesses.saturating_add(1);
    }
    GuessResult::Accepted { correct }
}

/// Evaluate the game; a win takes precedence over a loss
pub fn outcome(state: &GameState) -> Outcome {
    if state.secret_word.chars().all(|c| state.has_guessed(c)) {
        Outcome::Won
    } else if state.incorrect_guesses >= state.max_attempts {
        Outcome::Lost
    } else {
        Outcome::InProgress
    }
}

/// Incorrect guesses left before the game is lost
pub fn attempts_remaining(state: &GameState) -> u32 {
    state.max_attempts.saturating_sub(state.incorrect_guesses)
}

/// Secret word with unguessed letters replaced by `_`
pub fn render_masked_word(state: &GameState) -> String {
    state
        .secret_word
        .chars()
        .map(|c| if state.has_guessed(c) { c } else { MASK_CHAR })
        .collect()
}

/// Guessed letters in guess order, comma separated
pub fn render_guessed_letters(state: &GameState) -> String {
    state
        .guessed_letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(GUESS_SEPARATOR)
}
