//! Single-slot save/load
//!
//! Features:
//! - Versioned JSON envelope
//! - Atomic replace (write tmp, then rename over the slot)
//! - Missing slot is a normal `None`, malformed content is `CorruptSave`

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::SNAPSHOT_VERSION;
use crate::error::{HangmanError, Result};
use crate::sim::GameState;

/// On-disk wrapper around a game snapshot
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    game: serde_json::Value,
}

/// Encode a state as slot contents
pub fn encode(state: &GameState) -> Result<String> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        game: state.snapshot(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Decode slot contents back into a state
pub fn decode(text: &str) -> Result<GameState> {
    let envelope: Envelope =
        serde_json::from_str(text).map_err(|e| HangmanError::CorruptSave(e.to_string()))?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(HangmanError::CorruptSave(format!(
            "unsupported save version {}",
            envelope.version
        )));
    }
    GameState::restore(envelope.game)
}

/// One named location holding at most one snapshot
pub trait SaveSlot {
    /// Persist `state`, replacing whatever the slot held
    fn save(&mut self, state: &GameState) -> Result<()>;

    /// Read the snapshot back; `Ok(None)` when nothing was ever saved
    fn load(&self) -> Result<Option<GameState>>;
}

/// Slot backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SaveSlot for FileSlot {
    fn save(&mut self, state: &GameState) -> Result<()> {
        let json = encode(state)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        log::info!("Game saved to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No save at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let state = decode(&text)?;
        log::info!("Loaded saved game from {}", self.path.display());
        Ok(Some(state))
    }
}

/// Slot kept in memory as encoded text
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with raw contents (for corruption tests)
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }
}

impl SaveSlot for MemorySlot {
    fn save(&mut self, state: &GameState) -> Result<()> {
        self.contents = Some(encode(state)?);
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        self.contents.as_deref().map(decode).transpose()
    }
}
