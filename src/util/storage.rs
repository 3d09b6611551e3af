//! Key-value preference storage.
//!
//! DESIGN
//! ======
//! `PreferenceStore` is the seam between UI state and `localStorage`. State
//! types own a store value, so tests swap in an in-memory store and exercise
//! write-through without a browser.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStorage` looks the storage handle up on every call instead of
//! caching it. `web_sys::Storage` is not `Send`, and a zero-sized handle keeps
//! the owning state usable inside `RwSignal`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Failures reading or writing a preference store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No backing store is reachable (disabled storage, private mode, native build).
    #[error("preference storage unavailable")]
    Unavailable,

    #[error("preference read failed: {0}")]
    Read(String),

    #[error("preference write failed: {0}")]
    Write(String),
}

/// Synchronous string key-value store for user preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(err) => Err(StorageError::Read(format!("{err:?}"))),
    }
}

impl PreferenceStore for BrowserStorage {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Read(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Write(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
