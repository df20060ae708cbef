//! Session state holder. [`SessionStore`] is the only code that reads or writes
//! session keys: it loads the persisted session once at startup and exposes
//! the two mutation entry points, [`SessionStore::persist_login`] and
//! [`SessionStore::clear`].
//!
//! The session is stored as a single JSON record under [`SESSION_KEY`]. The
//! earlier layout spread it over three keys, which could drift apart when
//! storage was partially cleared; those keys are migrated on load and always
//! removed on logout.

use crate::authenticator::AuthGrant;
use crate::errors::StorageError;
use crate::storage::{
    Storage, LEGACY_AUTHENTICATED_KEY, LEGACY_SESSION_KEYS, LEGACY_TOKEN_KEY, LEGACY_USER_KEY,
    REMEMBERED_USERNAME_KEY, SESSION_KEY,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Client-held record asserting whether the current user is signed in.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn authenticated(token: String, user: Value) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token),
            user: Some(user),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Display name taken from the user record, if it carries one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.get("name"))
            .and_then(Value::as_str)
    }

    /// An authenticated session must carry a non-empty token.
    fn is_consistent(&self) -> bool {
        !self.is_authenticated || self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("is_authenticated", &self.is_authenticated)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user)
            .finish()
    }
}

pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the persisted session. Malformed or inconsistent records are
    /// discarded and yield an anonymous session; loading never fails.
    pub fn load(&self) -> Session {
        let Some(raw) = self.storage.get(SESSION_KEY) else {
            return self.migrate_legacy();
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_consistent() => {
                if session.is_authenticated {
                    session
                } else {
                    Session::anonymous()
                }
            }
            Ok(_) => {
                warn!("Discarding session record without a token");
                self.discard_record();
                Session::anonymous()
            }
            Err(err) => {
                warn!("Discarding unreadable session record: {err}");
                self.discard_record();
                Session::anonymous()
            }
        }
    }

    /// Persists a granted login as one record and updates the remembered
    /// username: stored when `remember` carries one, removed otherwise.
    ///
    /// The record is written last among the fallible steps, so an error
    /// leaves no session behind. Stale legacy keys are removed best effort;
    /// the record takes precedence over them on load.
    ///
    /// # Errors
    /// Returns an error if the remembered username or the session record
    /// cannot be written.
    pub fn persist_login(
        &self,
        grant: &AuthGrant,
        remember: Option<&str>,
    ) -> Result<Session, StorageError> {
        let session = Session::authenticated(grant.token.clone(), grant.user.clone());
        let record = serde_json::to_string(&session)?;

        self.remember_username(remember)?;
        self.storage.set(SESSION_KEY, &record)?;
        self.remove_legacy_keys();
        debug!("Session persisted");

        Ok(session)
    }

    /// Removes the session record and every legacy session key. All removals
    /// are attempted; the first failure is returned.
    ///
    /// # Errors
    /// Returns an error if any key could not be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in std::iter::once(SESSION_KEY).chain(LEGACY_SESSION_KEYS) {
            if let Err(err) = self.storage.remove(key) {
                warn!("Failed to remove {key}: {err}");
                first_error.get_or_insert(err);
            }
        }
        debug!("Session cleared");

        first_error.map_or(Ok(()), Err)
    }

    #[must_use]
    pub fn remembered_username(&self) -> Option<String> {
        self.storage
            .get(REMEMBERED_USERNAME_KEY)
            .filter(|value| !value.trim().is_empty())
    }

    /// # Errors
    /// Returns an error if the storage write fails.
    pub fn remember_username(&self, username: Option<&str>) -> Result<(), StorageError> {
        match username {
            Some(username) => self.storage.set(REMEMBERED_USERNAME_KEY, username),
            None => self.storage.remove(REMEMBERED_USERNAME_KEY),
        }
    }

    fn discard_record(&self) {
        if let Err(err) = self.storage.remove(SESSION_KEY) {
            warn!("Failed to remove session record: {err}");
        }
    }

    /// Folds the three-key layout into a record. A flag without a token is the
    /// partial-clear case and is treated as signed out.
    fn migrate_legacy(&self) -> Session {
        let flag = self.storage.get(LEGACY_AUTHENTICATED_KEY);
        let token = self
            .storage
            .get(LEGACY_TOKEN_KEY)
            .filter(|token| !token.is_empty());
        let user = self.storage.get(LEGACY_USER_KEY);

        if flag.is_none() && token.is_none() && user.is_none() {
            return Session::anonymous();
        }

        let session = match (flag.as_deref(), token) {
            (Some("true"), Some(token)) => {
                let user = user
                    .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
                    .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
                Session::authenticated(token, user)
            }
            _ => Session::anonymous(),
        };

        if !session.is_authenticated {
            debug!("Discarding incomplete legacy session keys");
            self.remove_legacy_keys();
            return session;
        }

        // Legacy keys stay until the record replacing them is stored.
        let written = serde_json::to_string(&session)
            .map_err(StorageError::from)
            .and_then(|record| self.storage.set(SESSION_KEY, &record));
        match written {
            Ok(()) => self.remove_legacy_keys(),
            Err(err) => warn!("Failed to migrate legacy session: {err}"),
        }

        session
    }

    fn remove_legacy_keys(&self) {
        for key in LEGACY_SESSION_KEYS {
            if let Err(err) = self.storage.remove(key) {
                warn!("Failed to remove legacy key {key}: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn grant() -> AuthGrant {
        AuthGrant {
            token: "mock-token".to_string(),
            user: json!({ "id": 1, "name": "Admin" }),
        }
    }

    #[test]
    fn empty_storage_loads_anonymous() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.load(), Session::anonymous());
    }

    #[test]
    fn persist_login_writes_single_record() {
        let store = SessionStore::new(MemoryStorage::new());
        let session = store.persist_login(&grant(), None).unwrap();

        assert!(session.is_authenticated());
        let raw = store.storage().get(SESSION_KEY).unwrap();
        let record: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(record["isAuthenticated"], json!(true));
        assert_eq!(record["authToken"], json!("mock-token"));
        assert_eq!(record["user"]["name"], json!("Admin"));

        assert_eq!(store.load(), session);
        assert_eq!(session.display_name(), Some("Admin"));
    }

    #[test]
    fn clear_removes_record_and_legacy_keys() {
        let storage = MemoryStorage::new();
        storage.set(LEGACY_AUTHENTICATED_KEY, "true").unwrap();
        let store = SessionStore::new(&storage);
        store.persist_login(&grant(), Some("admin")).unwrap();

        store.clear().unwrap();

        assert!(!storage.contains(SESSION_KEY));
        for key in LEGACY_SESSION_KEYS {
            assert!(!storage.contains(key));
        }
        assert_eq!(storage.get(REMEMBERED_USERNAME_KEY).as_deref(), Some("admin"));
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn legacy_layout_is_migrated() {
        let storage = MemoryStorage::new();
        storage.set(LEGACY_AUTHENTICATED_KEY, "true").unwrap();
        storage.set(LEGACY_TOKEN_KEY, "legacy-token").unwrap();
        storage.set(LEGACY_USER_KEY, r#"{"id":7,"name":"Nurse"}"#).unwrap();

        let store = SessionStore::new(&storage);
        let session = store.load();

        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("legacy-token"));
        assert_eq!(session.display_name(), Some("Nurse"));
        assert!(storage.contains(SESSION_KEY));
        for key in LEGACY_SESSION_KEYS {
            assert!(!storage.contains(key));
        }
    }

    #[test]
    fn partially_cleared_legacy_layout_is_signed_out() {
        let storage = MemoryStorage::new();
        storage.set(LEGACY_AUTHENTICATED_KEY, "true").unwrap();

        let store = SessionStore::new(&storage);

        assert!(!store.load().is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn record_without_token_is_discarded() {
        let storage = MemoryStorage::new();
        storage
            .set(SESSION_KEY, r#"{"isAuthenticated":true}"#)
            .unwrap();

        let store = SessionStore::new(&storage);

        assert!(!store.load().is_authenticated());
        assert!(!storage.contains(SESSION_KEY));
    }

    #[test]
    fn garbage_record_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "not json").unwrap();

        let store = SessionStore::new(&storage);

        assert_eq!(store.load(), Session::anonymous());
        assert!(!storage.contains(SESSION_KEY));
    }

    #[test]
    fn remember_username_toggles() {
        let store = SessionStore::new(MemoryStorage::new());
        store.persist_login(&grant(), Some("admin")).unwrap();
        assert_eq!(store.remembered_username().as_deref(), Some("admin"));

        store.persist_login(&grant(), None).unwrap();
        assert_eq!(store.remembered_username(), None);
    }

    /// Refuses writes and removals for one key.
    struct Refusing<'a> {
        inner: &'a MemoryStorage,
        key: &'static str,
    }

    impl Storage for Refusing<'_> {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::Unavailable);
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::Unavailable);
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_remembered_username_leaves_no_session() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(Refusing {
            inner: &storage,
            key: REMEMBERED_USERNAME_KEY,
        });

        assert!(store.persist_login(&grant(), Some("admin")).is_err());
        assert!(!storage.contains(SESSION_KEY));
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn failed_session_write_leaves_no_session() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(Refusing {
            inner: &storage,
            key: SESSION_KEY,
        });

        assert!(store.persist_login(&grant(), None).is_err());
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn stuck_legacy_key_does_not_fail_login() {
        let storage = MemoryStorage::new();
        storage.set(LEGACY_TOKEN_KEY, "old-token").unwrap();
        let store = SessionStore::new(Refusing {
            inner: &storage,
            key: LEGACY_TOKEN_KEY,
        });

        let session = store.persist_login(&grant(), None).unwrap();

        assert_eq!(store.load(), session);
        assert_eq!(session.token.as_deref(), Some("mock-token"));
    }

    #[test]
    fn legacy_keys_survive_failed_migration() {
        let storage = MemoryStorage::new();
        storage.set(LEGACY_AUTHENTICATED_KEY, "true").unwrap();
        storage.set(LEGACY_TOKEN_KEY, "legacy-token").unwrap();
        let store = SessionStore::new(Refusing {
            inner: &storage,
            key: SESSION_KEY,
        });

        assert!(store.load().is_authenticated());
        assert!(storage.contains(LEGACY_AUTHENTICATED_KEY));
        assert!(storage.contains(LEGACY_TOKEN_KEY));

        // A later load with working storage still finds the session.
        let store = SessionStore::new(&storage);
        assert_eq!(store.load().token.as_deref(), Some("legacy-token"));
        assert!(!storage.contains(LEGACY_TOKEN_KEY));
    }

    #[test]
    fn debug_redacts_token() {
        let session = Session::authenticated("secret-token".to_string(), json!({}));
        let printed = format!("{session:?}");
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("[REDACTED]"));
    }
}
