//! `localStorage` backend for [`SessionStore`]. Private browsing modes may
//! refuse storage entirely; reads then see an empty store and writes fail with
//! [`StorageError::Unavailable`].

use hwr_portal::errors::StorageError;
use hwr_portal::session::SessionStore;
use hwr_portal::storage::Storage;

pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let inner = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if inner.is_none() {
            tracing::warn!("localStorage is unavailable; sessions will not persist");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| write_error(key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| write_error(key, &err))
    }
}

fn write_error(key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Write {
        key: key.to_string(),
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

/// Session store over the browser's `localStorage`.
pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage::new())
}
