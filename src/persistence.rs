//! Key-value persistence port for the notes store.
//!
//! The store reads and writes three logical slots (notes collection, tag
//! registry, active-note pointer) through the `SlotStore` trait, keeping the
//! core decoupled from any particular storage medium. `FileSlotStore` is the
//! durable implementation, holding one JSON file per slot; `MemorySlotStore`
//! backs tests.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::PathBuf,
};

use log::{debug, error, trace};
use tempfile::NamedTempFile;

use crate::{NotesError, Result};

/// Slot key for the serialized notes collection.
pub const NOTES_SLOT: &str = "notes_app_v1";

/// Slot key for the serialized tag registry.
pub const TAGS_SLOT: &str = "notes_app_tags_v1";

/// Slot key for the serialized active-note pointer.
pub const ACTIVE_SLOT: &str = "notes_app_active_v1";

/// A generic string-keyed text store used to persist store state.
pub trait SlotStore {
    /// Reads the value stored under `key`, or `None` when the slot has
    /// never been written.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write_slot(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Durable slot store keeping one JSON file per slot under a data directory.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Creates a slot store rooted at `dir`, creating the directory if it
    /// does not exist yet.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if !dir.exists() {
            debug!("Data directory does not exist, creating: {}", dir.display());
            fs::create_dir_all(&dir).map_err(|e| {
                error!("Failed to create data directory {}: {}", dir.display(), e);
                NotesError::DirectoryError { path: dir.clone() }
            })?;
        }
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStore for FileSlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            trace!("Slot {} has no backing file", key);
            return Ok(None);
        }

        let value = fs::read_to_string(&path).map_err(|e| {
            error!("Failed to read slot file {}: {}", path.display(), e);
            NotesError::Io(e)
        })?;
        trace!("Read slot {} ({} bytes)", key, value.len());
        Ok(Some(value))
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);

        // Write to a temporary file in the same directory, then move it into
        // place, so a crash mid-write never truncates the slot.
        let mut temp_file = NamedTempFile::new_in(&self.dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            NotesError::Io(e)
        })?;

        temp_file.write_all(value.as_bytes()).map_err(|e| {
            error!("Failed to write to temporary file: {}", e);
            NotesError::Io(e)
        })?;

        temp_file.flush().map_err(|e| {
            error!("Failed to flush temporary file: {}", e);
            NotesError::Io(e)
        })?;

        temp_file.persist(&path).map_err(|e| {
            error!("Failed to persist slot file {}: {}", path.display(), e.error);
            NotesError::Io(e.error)
        })?;

        debug!("Wrote slot {} ({} bytes)", key, value.len());
        Ok(())
    }
}

/// In-memory slot store used by tests.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, simulating exhausted storage.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Direct access to a raw slot value, for assertions.
    pub fn raw_slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Pre-populates a slot, for load tests.
    pub fn insert_slot(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(NotesError::Io(io::Error::new(
                io::ErrorKind::Other,
                "slot store writes disabled",
            )));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySlotStore, SlotStore};

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemorySlotStore::new();
        assert!(store.read_slot("missing").unwrap().is_none());

        store.write_slot("key", "value").unwrap();
        assert_eq!(store.read_slot("key").unwrap().as_deref(), Some("value"));

        store.write_slot("key", "replaced").unwrap();
        assert_eq!(store.read_slot("key").unwrap().as_deref(), Some("replaced"));
    }

    #[test]
    fn memory_store_fail_switch_rejects_writes() {
        let mut store = MemorySlotStore::new();
        store.write_slot("key", "value").unwrap();
        store.set_fail_writes(true);
        assert!(store.write_slot("key", "ignored").is_err());
        // The previous value survives a rejected write.
        assert_eq!(store.read_slot("key").unwrap().as_deref(), Some("value"));
    }
}
