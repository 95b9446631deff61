//! Persistence for the display-mode preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller talks to a [`PreferenceStore`] so it never reaches for
//! `window.localStorage` itself. [`LocalStore`] wraps the browser storage
//! (hydrate only); [`MemoryStore`] stands in everywhere else.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::ChromeError;

/// String key/value storage with explicit removal.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Storage`] if the backend throws.
    fn read(&self, key: &str) -> Result<Option<String>, ChromeError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Storage`] if the backend throws (quota, privacy mode).
    fn write(&mut self, key: &str, value: &str) -> Result<(), ChromeError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Storage`] if the backend throws.
    fn clear(&mut self, key: &str) -> Result<(), ChromeError>;
}

/// In-memory store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, ChromeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ChromeError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), ChromeError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Browser `localStorage`.
///
/// When storage is disabled the store still exists: reads see nothing and
/// writes fail with [`ChromeError::StorageUnavailable`], so the theme works
/// for the current page view only.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the window's local storage.
    #[must_use]
    pub fn from_window(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("local storage access threw: {e:?}");
                None
            }
        };
        if storage.is_none() {
            log::warn!("local storage unavailable; theme preference will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, ChromeError> {
        self.storage.as_ref().ok_or(ChromeError::StorageUnavailable)
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, ChromeError> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|e| ChromeError::Storage(format!("get {key}: {e:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ChromeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ChromeError::Storage(format!("set {key}: {e:?}")))
    }

    fn clear(&mut self, key: &str) -> Result<(), ChromeError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| ChromeError::Storage(format!("remove {key}: {e:?}")))
    }
}
