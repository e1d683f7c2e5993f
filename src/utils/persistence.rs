//! Player snapshot persistence.
//!
//! A [`SaveSlot`] is a single durable key holding the JSON text of the player
//! record. [`PersistenceStore`] layers parsing, validation and the
//! "fall back to the default player" policy on top of any slot.

use crate::character::player::{Player, SnapshotError};
use crate::core::constants::{SAVE_DIR_NAME, SAVE_FILE_NAME};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),

    #[error("could not determine a save directory")]
    NoSaveDirectory,
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// A durable key-value slot holding one serialized snapshot.
pub trait SaveSlot {
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    fn write(&mut self, contents: &str) -> Result<()>;
}

/// Save slot backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `<config dir>/quest-arena/player.json` for the current platform.
    pub fn default_location() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("", "", SAVE_DIR_NAME).ok_or(PersistenceError::NoSaveDirectory)?;
        Ok(Self::new(project_dirs.config_dir().join(SAVE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        // Write to a sibling temp file then rename, so a crash never leaves half a save
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved player to {}", self.path.display());
        Ok(())
    }
}

/// In-memory slot for tests and the simulator.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Option<String>,
    pub writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            writes: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl SaveSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Loads and saves the player record through a [`SaveSlot`].
#[derive(Debug)]
pub struct PersistenceStore<S: SaveSlot> {
    slot: S,
}

impl<S: SaveSlot> PersistenceStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Reads the saved player. `Ok(None)` means no save exists yet.
    pub fn load(&self) -> Result<Option<Player>> {
        let Some(json) = self.slot.read()? else {
            return Ok(None);
        };
        let player: Player = serde_json::from_str(&json)?;
        player.validate()?;
        Ok(Some(player))
    }

    /// Loads the saved player, or the default one when nothing usable is stored.
    pub fn load_or_default(&self) -> Player {
        match self.load() {
            Ok(Some(player)) => {
                tracing::debug!(name = %player.name, level = player.level, "Loaded saved player");
                player
            }
            Ok(None) => {
                tracing::debug!("No save found, starting a new player");
                Player::default()
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable save: {}", e);
                Player::default()
            }
        }
    }

    pub fn save(&mut self, player: &Player) -> Result<()> {
        let json = serde_json::to_string_pretty(player)?;
        self.slot.write(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_slot_loads_default() {
        let store = PersistenceStore::new(MemorySlot::new());
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.load_or_default(), Player::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = PersistenceStore::new(MemorySlot::new());
        let mut player = Player::default();
        player.gold = 777;
        player.xp = 1234;

        store.save(&player).unwrap();

        assert_eq!(store.slot().writes, 1);
        assert_eq!(store.load().unwrap(), Some(player));
    }

    #[test]
    fn test_corrupt_json_falls_back_to_default() {
        let store = PersistenceStore::new(MemorySlot::with_contents("{not json"));
        assert!(matches!(store.load(), Err(PersistenceError::Json(_))));
        assert_eq!(store.load_or_default(), Player::default());
    }

    #[test]
    fn test_invalid_snapshot_falls_back_to_default() {
        let mut player = Player::default();
        player.hp = player.max_hp + 5;
        let json = serde_json::to_string(&player).unwrap();
        let store = PersistenceStore::new(MemorySlot::with_contents(json));

        assert!(matches!(
            store.load(),
            Err(PersistenceError::InvalidSnapshot(_))
        ));
        assert_eq!(store.load_or_default(), Player::default());
    }

    #[test]
    fn test_file_slot_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("player.json");
        let mut store = PersistenceStore::new(FileSlot::new(&path));

        assert!(store.load().unwrap().is_none());

        let mut player = Player::default();
        player.level = 4;
        store.save(&player).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let reopened = PersistenceStore::new(FileSlot::new(&path));
        assert_eq!(reopened.load_or_default().level, 4);
    }

    #[test]
    fn test_file_slot_writes_camel_case_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player.json");
        let mut store = PersistenceStore::new(FileSlot::new(&path));
        store.save(&Player::default()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"maxHp\": 193"));
        assert!(text.contains("\"healthPotions\": 5"));
    }

    #[test]
    fn test_default_location_ends_with_save_file() {
        if let Ok(slot) = FileSlot::default_location() {
            assert!(slot.path().ends_with("player.json"));
        }
    }
}
