//! In-process `PreferenceStore` for native tests.
//!
//! Stands in for `localStorage`, including the disabled-storage case where
//! every read and write fails.

#[path = "memory_store_test.rs"]
mod memory_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::storage::{PreferenceStore, StorageError};

/// In-process store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        store
    }

    /// A store that fails every read and write, like disabled browser storage.
    pub fn disabled() -> Self {
        Self { disabled: true, ..Self::default() }
    }

    /// Current value under `key`, bypassing the availability flag.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.entries.lock() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => None,
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Read("store lock poisoned".to_owned()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Write("store lock poisoned".to_owned()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
