//! End-to-end session tests: menu, play, save, resume

use hangman::console::ScriptedConsole;
use hangman::dictionary::{FileWordSource, WordSource};
use hangman::persistence::{FileSlot, SaveSlot};
use hangman::session::{self, SessionEnd};
use hangman::sim::{GameState, render_guessed_letters, render_masked_word, submit_guess};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn last_board(console: &ScriptedConsole) -> (String, String) {
    let out = console.output();
    let word = out.iter().rev().find(|l| l.starts_with("Word: ")).unwrap();
    let letters = out
        .iter()
        .rev()
        .find(|l| l.starts_with("Guessed letters: "))
        .unwrap();
    (word.clone(), letters.clone())
}

#[test]
fn test_save_then_load_restores_board() {
    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("saved_game.json");
    let words = vec!["kiwifruit".to_string()];
    let mut rng = Pcg32::seed_from_u64(3);

    let mut console = ScriptedConsole::new(["new", "k", "z", "i", "save"]);
    let mut slot = FileSlot::new(&save_path);
    let end = session::run(&mut console, &words, &mut slot, &mut rng).unwrap();
    assert_eq!(end, SessionEnd::SavedAndExited);
    let before = last_board(&console);
    assert_eq!(before.0, "Word: ki_i___i_");
    assert_eq!(before.1, "Guessed letters: k, z, i");

    // Fresh slot handle on the same file, as a new process would have.
    let mut slot = FileSlot::new(&save_path);
    let mut console = ScriptedConsole::new(["load"]);
    let end = session::run(&mut console, &words, &mut slot, &mut rng).unwrap();
    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(last_board(&console), before);
}

#[test]
fn test_resumed_game_keeps_miss_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut slot = FileSlot::new(dir.path().join("save.json"));

    let mut state = GameState::new("kiwi");
    for guess in ["x", "y", "z", "q", "j", "v", "b"] {
        submit_guess(&mut state, guess);
    }
    slot.save(&state).unwrap();

    let words = vec!["unused".to_string()];
    let mut rng = Pcg32::seed_from_u64(0);
    let mut console = ScriptedConsole::new(["LOAD", "c"]);
    let end = session::run(&mut console, &words, &mut slot, &mut rng).unwrap();
    assert_eq!(end, SessionEnd::Lost);
    assert!(console.printed("Incorrect guess! You have 0 attempts left."));
    assert!(console.printed("Sorry, you're out of attempts. The word was kiwi."));
}

#[test]
fn test_file_round_trip_preserves_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let mut slot = FileSlot::new(dir.path().join("save.json"));

    let mut state = GameState::new("treasure");
    for guess in ["e", "m", "r", "s"] {
        submit_guess(&mut state, guess);
    }
    slot.save(&state).unwrap();

    let restored = slot.load().unwrap().unwrap();
    assert_eq!(restored, state);
    assert_eq!(render_masked_word(&restored), "_re_s_re");
    assert_eq!(render_guessed_letters(&restored), "e, m, r, s");
}

#[test]
fn test_new_game_from_dictionary_file() {
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("words.txt");
    std::fs::write(&dict, "cat\nDOG\nPlanet\nsupercalifragilistic\n").unwrap();

    let source = FileWordSource::new(&dict);
    assert_eq!(source.words().unwrap().len(), 4);

    let mut rng = Pcg32::seed_from_u64(11);
    let mut slot = FileSlot::new(dir.path().join("save.json"));
    let mut console = ScriptedConsole::new(["new", "p", "l", "a", "n", "e", "t"]);
    let end = session::run(&mut console, &source, &mut slot, &mut rng).unwrap();
    assert_eq!(end, SessionEnd::Won);
    assert!(console.printed("Word: planet"));
}

#[test]
fn test_missing_dictionary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileWordSource::new(dir.path().join("missing.txt"));
    let mut slot = FileSlot::new(dir.path().join("save.json"));
    let mut rng = Pcg32::seed_from_u64(0);
    let mut console = ScriptedConsole::new(["new"]);
    assert!(session::run(&mut console, &source, &mut slot, &mut rng).is_err());
}
