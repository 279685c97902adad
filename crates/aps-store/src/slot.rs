//! Key-value slot backends.
//!
//! A slot is the synchronous, string-keyed, one-JSON-blob-per-key store
//! the collection persists through (a browser profile's local storage, in
//! the original deployment). It is injected as a capability so the core
//! stays testable without any real storage substrate.

use crate::error::SlotError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Synchronous string-keyed storage with one serialized value per key.
pub trait KeyValueSlot: Send + Sync {
    /// Read the value at `key`, if present. Absence is not an error.
    fn get(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Overwrite the value at `key` in a single write.
    fn set(&self, key: &str, value: &str) -> Result<(), SlotError>;
}

/// In-memory slot for tests and demos.
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySlot {
    /// Create an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed slot: one file per key under a root directory.
///
/// Writes go through a temp file followed by a rename, so a reader never
/// observes a half-written blob.
#[derive(Debug, Clone)]
pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at `root`. The directory is created on the
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SlotError::Io(err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        fs::create_dir_all(&self.root).map_err(|e| SlotError::Io(e.to_string()))?;

        let path = self.path_for(key);
        let staging = self.root.join(format!("{key}.json.tmp"));

        fs::write(&staging, value).map_err(|e| SlotError::Io(e.to_string()))?;
        fs::rename(&staging, &path).map_err(|e| SlotError::Io(e.to_string()))?;
        Ok(())
    }
}
