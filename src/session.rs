//! Launch menu and interactive guess loop
//!
//! Drives a [`GameState`] through the console until the game is won, lost,
//! saved, or the input runs out.

use rand::Rng;

use crate::console::Console;
use crate::consts::SAVE_COMMAND;
use crate::dictionary::WordSource;
use crate::error::Result;
use crate::persistence::SaveSlot;
use crate::sim::{
    GameState, GuessResult, Outcome, attempts_remaining, outcome, render_guessed_letters,
    render_masked_word, submit_guess,
};

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    SavedAndExited,
    /// Input stream closed before the game ended; nothing was saved
    InputClosed,
}

const MENU_PROMPT: &str =
    "Would you like to start a new game or load a saved game? (Type 'new' or 'load')";
const MENU_INVALID: &str = "Invalid option. Please type 'new' or 'load'.";
const NO_SAVE: &str = "No saved game found.";
const GUESS_PROMPT: &str = "Make a guess or type 'save' to save the game:";

/// Ask for `new` or `load` until a game can be started, then play it.
///
/// Dictionary failures are fatal and returned; load failures are reported and
/// the menu is shown again.
pub fn run<C, W, S, R>(console: &mut C, words: &W, slot: &mut S, rng: &mut R) -> Result<SessionEnd>
where
    C: Console + ?Sized,
    W: WordSource + ?Sized,
    S: SaveSlot + ?Sized,
    R: Rng + ?Sized,
{
    loop {
        console.write_line(MENU_PROMPT)?;
        let Some(option) = console.read_line()? else {
            log::info!("Input closed at launch menu");
            return Ok(SessionEnd::InputClosed);
        };

        match option.to_lowercase().as_str() {
            "new" => {
                let words = words.words()?;
                let state = GameState::create_new(&words, rng)?;
                log::info!("Started new game ({} letters)", state.secret_word.len());
                return play(console, state, slot);
            }
            "load" => match slot.load() {
                Ok(Some(state)) => {
                    log::info!(
                        "Resuming game with {} guesses made",
                        state.guessed_letters.len()
                    );
                    return play(console, state, slot);
                }
                Ok(None) => console.write_line(NO_SAVE)?,
                Err(e) => {
                    log::warn!("Failed to load saved game: {}", e);
                    console.write_line(&format!("Could not load saved game: {}", e))?;
                }
            },
            _ => console.write_line(MENU_INVALID)?,
        }
    }
}

/// Run the guess loop on `state` until it reaches an end.
///
/// A failed save is reported and play continues with the state untouched.
pub fn play<C, S>(console: &mut C, mut state: GameState, slot: &mut S) -> Result<SessionEnd>
where
    C: Console + ?Sized,
    S: SaveSlot + ?Sized,
{
    console.write_line("Welcome to Hangman!")?;
    show_board(console, &state)?;

    loop {
        console.write_line("")?;
        console.write_line(GUESS_PROMPT)?;
        let Some(input) = console.read_line()? else {
            log::info!("Input closed mid-game, exiting without saving");
            return Ok(SessionEnd::InputClosed);
        };

        if input.eq_ignore_ascii_case(SAVE_COMMAND) {
            match slot.save(&state) {
                Ok(()) => {
                    console.write_line("Game saved successfully.")?;
                    return Ok(SessionEnd::SavedAndExited);
                }
                Err(e) => {
                    log::warn!("Save failed: {}", e);
                    console.write_line(&format!("Save failed: {}", e))?;
                    continue;
                }
            }
        }

        match submit_guess(&mut state, &input) {
            GuessResult::Rejected(reason) => {
                console.write_line(&reason.to_string())?;
                continue;
            }
            GuessResult::Accepted { correct: true } => console.write_line("Correct guess!")?,
            GuessResult::Accepted { correct: false } => console.write_line(&format!(
                "Incorrect guess! You have {} attempts left.",
                attempts_remaining(&state)
            ))?,
        }

        show_board(console, &state)?;

        match outcome(&state) {
            Outcome::Won => {
                console.write_line("Congratulations, you've guessed the word!")?;
                log::info!("Game won after {} guesses", state.guessed_letters.len());
                return Ok(SessionEnd::Won);
            }
            Outcome::Lost => {
                console.write_line(&format!(
                    "Sorry, you're out of attempts. The word was {}.",
                    state.secret_word
                ))?;
                log::info!("Game lost");
                return Ok(SessionEnd::Lost);
            }
            Outcome::InProgress => {}
        }
    }
}

fn show_board<C: Console + ?Sized>(console: &mut C, state: &GameState) -> Result<()> {
    console.write_line(&format!("Word: {}", render_masked_word(state)))?;
    console.write_line(&format!(
        "Guessed letters: {}",
        render_guessed_letters(state)
    ))?;
    Ok(())
}
