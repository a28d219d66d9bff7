//! Game state machine
//!
//! All gameplay rules live here. This module must stay pure:
//! - State is an explicit value passed to free functions
//! - Word selection takes an injected RNG
//! - No console, file or logging side effects beyond `log` diagnostics

pub mod state;
pub mod turn;

pub use state::GameState;
pub use turn::{
    GuessRejection, GuessResult, Outcome, attempts_remaining, outcome, render_guessed_letters,
    render_masked_word, submit_guess,
};
