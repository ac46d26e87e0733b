//! The content store: string-keyed JSON blobs behind a pluggable backend.
//!
//! Every collection persists as one serialized JSON document under one key,
//! the way browser local storage holds one string per key. The backend seam
//! keeps the CRUD layer testable and lets the demo run fully in memory.

mod content;
pub mod seed;

pub use content::{ContentError, ContentStore};

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("store lock poisoned")]
    Poisoned,
}

/// A persistent slot of string values, one per key.
///
/// Writes are whole-value overwrites; there is no merge, versioning, or
/// cross-process coordination. Last writer wins.
pub trait StoreBackend: Send + Sync {
    /// Read the raw string at `key`, `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the slot cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the slot cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value at `key`; absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the slot cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// File-per-key backend: `<dir>/<key>.json`.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(dir).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoreBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::write(self.path_for(key), value).map_err(|e| StoreError::Io(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }
}

/// In-memory backend for tests and ephemeral demo mode.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
