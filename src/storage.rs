//! Key-value string storage behind the session holder. The browser build backs
//! this with `window.localStorage`; tests and native tools use [`MemoryStorage`].
//! Values are stored in clear text, so nothing secret beyond the opaque session
//! token may be written here.

use crate::errors::StorageError;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Atomic session record.
pub const SESSION_KEY: &str = "session";
/// Username pre-filled on the login form when "remember me" was checked.
pub const REMEMBERED_USERNAME_KEY: &str = "rememberedUsername";

/// Keys written by the earlier three-key session layout.
pub const LEGACY_AUTHENTICATED_KEY: &str = "isAuthenticated";
pub const LEGACY_TOKEN_KEY: &str = "authToken";
pub const LEGACY_USER_KEY: &str = "user";
pub const LEGACY_SESSION_KEYS: [&str; 3] =
    [LEGACY_AUTHENTICATED_KEY, LEGACY_TOKEN_KEY, LEGACY_USER_KEY];

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns an error if the backend refuses the write (quota, privacy mode).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    /// Returns an error if the backend is unavailable.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set(REMEMBERED_USERNAME_KEY, "admin").unwrap();
        assert_eq!(storage.get(REMEMBERED_USERNAME_KEY).as_deref(), Some("admin"));

        storage.remove(REMEMBERED_USERNAME_KEY).unwrap();
        assert!(!storage.contains(REMEMBERED_USERNAME_KEY));
    }

    #[test]
    fn removing_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("missing").is_ok());
    }

    #[test]
    fn borrowed_storage_delegates() {
        let storage = MemoryStorage::new();
        let borrowed = &storage;
        borrowed.set(SESSION_KEY, "{}").unwrap();
        assert!(storage.contains(SESSION_KEY));
    }
}
