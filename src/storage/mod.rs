//! Draft persistence
//!
//! The editor keeps exactly one saved draft under a fixed key. Backends only
//! need to read, write and remove a string value; the envelope format and
//! the load policy live in [`draft`].

pub mod draft;
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::collections::HashMap;
use thiserror::Error;

pub use draft::{decode_draft, encode_draft, load_draft, save_draft, PersistedDraft, SCHEMA_VERSION};
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

/// Default key the draft is stored under
pub const DEFAULT_STORAGE_KEY: &str = "lyricsLabDraft";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store cannot be reached at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Failed to serialize draft: {0}")]
    Serialize(String),
}

/// Key-value slot for the saved draft
pub trait DraftStore {
    /// Stored value, or `None` if the key was never written
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store (tests, and hosts without persistent storage)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl DraftStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}
