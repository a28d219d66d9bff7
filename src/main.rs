//! Hangman entry point
//!
//! Loads settings, wires the terminal, dictionary and save slot together and
//! runs one session.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use hangman::cli::Cli;
use hangman::console::StdConsole;
use hangman::dictionary::FileWordSource;
use hangman::persistence::FileSlot;
use hangman::session::{self, SessionEnd};
use hangman::{Result, Settings};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Hangman starting...");

    let cli = Cli::parse();

    match run(cli) {
        Ok(end) => {
            log::info!("Session ended: {:?}", end);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<SessionEnd> {
    let settings = Settings::load(&cli.config)?;

    let seed = cli.seed.or(settings.seed).unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);
    let mut rng = Pcg32::seed_from_u64(seed);

    let words = FileWordSource::new(&settings.dictionary_path);
    let mut slot = FileSlot::new(&settings.save_path);
    let mut console = StdConsole::new();

    session::run(&mut console, &words, &mut slot, &mut rng)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
