//! Game settings
//!
//! Layered with `config`: an optional JSON file, then `HANGMAN_*` environment
//! variables on top.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{HangmanError, Result};

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "hangman.json";

/// Prefix for environment overrides (`HANGMAN_SAVE_PATH`, `HANGMAN_SEED`, ...)
pub const ENV_PREFIX: &str = "HANGMAN";

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Word list, one word per line
    pub dictionary_path: PathBuf,
    /// Save slot location
    pub save_path: PathBuf,
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("words.txt"),
            save_path: PathBuf::from("saved_game.json"),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from `path` (defaults if the file is absent), then apply
    /// process environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        Self::build(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Layer `env` over the optional settings file at `path`
    pub fn build(path: &Path, env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .and_then(|config| config.try_deserialize::<Self>())
            .map_err(|source| HangmanError::Settings {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("Settings loaded (file: {})", path.display());
        Ok(settings)
    }
}
