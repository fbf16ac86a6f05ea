//! Durable storage for the board record.
//!
//! The board lives in a single keyed record holding `{ topicTitle, notes }`.
//! Loading is best effort: a missing or corrupt record yields an empty board.
//! Saving overwrites the whole record atomically and never reports failure to
//! the user.

use crate::constants::{APP_DIR_NAME, STORAGE_KEY};
use crate::error::StorageResult;
use crate::types::Note;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Persisted part of the board state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    #[serde(default)]
    pub topic_title: String,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Keyed string storage, modelled on a browser's local storage.
pub trait Storage: Send + Sync {
    /// Read the value under `key`; `Ok(None)` when nothing was stored.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// One JSON file per key inside a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;
        // Write beside the target and rename so readers never see a partial record
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path_for(key))?;
        Ok(())
    }
}

/// In-process storage, used by tests and as a fallback.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// Platform data directory for the board record, falling back to the
/// working directory when the platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME))
}

/// Load the persisted board. Never fails: anything unreadable becomes an
/// empty snapshot and is only logged.
pub fn load_snapshot(storage: &dyn Storage) -> BoardSnapshot {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No saved board found, starting empty");
            return BoardSnapshot::default();
        }
        Err(e) => {
            tracing::warn!("Failed to read saved board: {}", e);
            return BoardSnapshot::default();
        }
    };

    match serde_json::from_str::<BoardSnapshot>(&raw) {
        Ok(snapshot) => repair_snapshot(snapshot),
        Err(e) => {
            tracing::warn!("Saved board is unreadable, starting empty: {}", e);
            BoardSnapshot::default()
        }
    }
}

/// Serialize and overwrite the persisted board. Failures are logged and
/// otherwise ignored.
pub fn save_snapshot(storage: &dyn Storage, snapshot: &BoardSnapshot) {
    let json = match serde_json::to_string(snapshot) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to serialize board: {}", e);
            return;
        }
    };
    if let Err(e) = storage.set(STORAGE_KEY, &json) {
        tracing::warn!("Failed to save board: {}", e);
    }
}

/// Restore invariants a hand-edited or stale record may violate: category
/// follows color, text is trimmed and non-empty.
fn repair_snapshot(mut snapshot: BoardSnapshot) -> BoardSnapshot {
    let before = snapshot.notes.len();
    snapshot.notes.retain(|note| !note.text.trim().is_empty());
    if snapshot.notes.len() != before {
        tracing::warn!(
            "Dropped {} saved note(s) with empty text",
            before - snapshot.notes.len()
        );
    }

    for note in &mut snapshot.notes {
        let expected = note.color.category();
        if note.category != expected {
            tracing::warn!(
                "Note {} has category {:?} but color {}; using {:?}",
                note.id,
                note.category,
                note.color,
                expected
            );
            note.category = expected;
        }
        let trimmed = note.text.trim();
        if trimmed.len() != note.text.len() {
            note.text = trimmed.to_string();
        }
    }
    snapshot
}
