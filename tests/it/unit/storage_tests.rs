//! Unit tests for board persistence.

use kwl_board::constants::STORAGE_KEY;
use kwl_board::error::StorageResult;
use kwl_board::storage::{
    BoardSnapshot, FileStorage, MemoryStorage, Storage, load_snapshot, save_snapshot,
};
use kwl_board::types::{Category, Note, NoteColor};
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::TempDir;

fn sample() -> BoardSnapshot {
    BoardSnapshot {
        topic_title: "Volcanoes".to_string(),
        notes: vec![
            Note::new("magma is hot", NoteColor::Yellow),
            Note::new("why do they erupt?", NoteColor::Pink),
            Note::new("plates move", NoteColor::Orange),
        ],
    }
}

#[test]
fn test_file_storage_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    let snapshot = sample();
    save_snapshot(&storage, &snapshot);

    assert!(storage.path_for(STORAGE_KEY).exists());
    assert_eq!(load_snapshot(&storage), snapshot);
}

#[test]
fn test_file_storage_creates_missing_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let storage = FileStorage::new(&nested);

    storage.set("key", "value").unwrap();
    assert_eq!(storage.get("key").unwrap().as_deref(), Some("value"));
    assert_eq!(storage.dir(), nested.as_path());
}

#[test]
fn test_file_storage_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    save_snapshot(&storage, &sample());
    save_snapshot(&storage, &BoardSnapshot::default());

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 1, "unexpected files: {entries:?}");
    assert_eq!(load_snapshot(&storage), BoardSnapshot::default());
}

#[test]
fn test_missing_record_is_empty_board() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
    assert_eq!(load_snapshot(&storage), BoardSnapshot::default());
}

#[test]
fn test_corrupt_record_is_empty_board() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "{not json").unwrap();
    assert_eq!(load_snapshot(&storage), BoardSnapshot::default());

    storage.set(STORAGE_KEY, r#"{"notes": 5}"#).unwrap();
    assert_eq!(load_snapshot(&storage), BoardSnapshot::default());
}

#[test]
fn test_load_repairs_mismatched_category() {
    let storage = MemoryStorage::new();
    storage
        .set(
            STORAGE_KEY,
            r#"{"topicTitle":"t","notes":[
                {"id":"x","text":"rocks","color":"yellow","category":"learned"}
            ]}"#,
        )
        .unwrap();

    let snapshot = load_snapshot(&storage);
    assert_eq!(snapshot.notes.len(), 1);
    assert_eq!(snapshot.notes[0].category, Category::Know);
}

#[test]
fn test_load_drops_blank_notes_and_trims_text() {
    let storage = MemoryStorage::new();
    storage
        .set(
            STORAGE_KEY,
            r#"{"notes":[
                {"id":"a","text":"   ","color":"pink","category":"want"},
                {"id":"b","text":"  lava  ","color":"pink","category":"want"}
            ]}"#,
        )
        .unwrap();

    let snapshot = load_snapshot(&storage);
    assert_eq!(snapshot.topic_title, "");
    assert_eq!(snapshot.notes.len(), 1);
    assert_eq!(snapshot.notes[0].id, "b");
    assert_eq!(snapshot.notes[0].text, "lava");
}

#[test]
fn test_unreadable_directory_is_empty_board() {
    let dir = TempDir::new().unwrap();
    // A directory where the record file should be makes the read fail
    let storage = FileStorage::new(dir.path());
    std::fs::create_dir(storage.path_for(STORAGE_KEY)).unwrap();

    assert!(storage.get(STORAGE_KEY).is_err());
    assert_eq!(load_snapshot(&storage), BoardSnapshot::default());

    // Saving fails too but is swallowed, leaving no stray temp files behind
    save_snapshot(&storage, &sample());
    assert!(storage.path_for(STORAGE_KEY).is_dir());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

/// File storage whose writes can be switched off
struct FlakyStorage {
    inner: FileStorage,
    fail_writes: AtomicBool,
}

impl Storage for FlakyStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("disk full").into());
        }
        self.inner.set(key, value)
    }
}

#[test]
fn test_failed_write_keeps_previous_record() {
    let dir = TempDir::new().unwrap();
    let storage = FlakyStorage {
        inner: FileStorage::new(dir.path()),
        fail_writes: AtomicBool::new(false),
    };
    let before = sample();
    save_snapshot(&storage, &before);

    storage.fail_writes.store(true, Ordering::SeqCst);
    let mut after = before.clone();
    after.topic_title = "Earthquakes".to_string();
    after.notes.truncate(1);
    save_snapshot(&storage, &after);

    assert_eq!(load_snapshot(&storage), before);
    assert_eq!(load_snapshot(&storage.inner), before);
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_keeps_previous_record() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    let before = sample();
    save_snapshot(&storage, &before);

    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();
    // Privileged users ignore directory permissions, so there is nothing to check
    if tempfile::NamedTempFile::new_in(dir.path()).is_ok() {
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut after = before.clone();
    after.notes.clear();
    assert!(storage.set(STORAGE_KEY, "{}").is_err());
    save_snapshot(&storage, &after);

    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(load_snapshot(&storage), before);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
