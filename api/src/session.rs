//! Session state and its persistence.
//!
//! The session is an explicit object passed by handle to the HTTP client
//! and the view layer, never ambient global state. Identity and token are
//! set together and cleared together; persistence happens synchronously
//! inside [`Session::login`] and [`Session::logout`]. No network I/O.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::UserSummary;

/// Storage key for the serialized user profile.
pub const USER_KEY: &str = "user";
/// Storage key for the opaque bearer token.
pub const TOKEN_KEY: &str = "token";

/// Key-value backing store for persisted credentials.
pub trait CredentialStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// `window.localStorage` store, so credentials survive page reloads.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::get::<String>(key).ok()
    }

    fn write(&self, key: &str, value: &str) {
        use gloo_storage::Storage;
        if let Err(err) = gloo_storage::LocalStorage::set(key, value) {
            tracing::error!("failed to persist {key}: {err}");
        }
    }

    fn remove(&self, key: &str) {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::delete(key);
    }
}

/// The authenticated identity and its token. Present or absent as a pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub user: UserSummary,
    pub token: String,
}

/// Current session, shared by handle between the HTTP client and the views.
///
/// Cheap to clone; state lives behind an `Arc` and is only ever replaced
/// wholesale under its lock.
#[derive(Clone, Debug)]
pub struct Session<S: CredentialStore> {
    current: Arc<Mutex<Option<Account>>>,
    store: S,
}

impl<S: CredentialStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            store,
        }
    }

    /// Load persisted credentials. Runs once at startup, before the first
    /// authorized request is issued.
    ///
    /// A half-present pair (one key missing or unparseable) counts as
    /// logged out and both keys are removed.
    pub fn restore(&self) {
        let token = self.store.read(TOKEN_KEY);
        let user = self
            .store
            .read(USER_KEY)
            .and_then(|raw| serde_json::from_str::<UserSummary>(&raw).ok());
        let account = match (user, token) {
            (Some(user), Some(token)) => Some(Account { user, token }),
            (None, None) => None,
            _ => {
                self.store.remove(USER_KEY);
                self.store.remove(TOKEN_KEY);
                None
            }
        };
        *self.current.lock().unwrap() = account;
    }

    /// Store a fresh identity and token. Both are persisted before this
    /// returns.
    pub fn login(&self, user: UserSummary, token: String) {
        match serde_json::to_string(&user) {
            Ok(raw) => self.store.write(USER_KEY, &raw),
            Err(err) => tracing::error!("failed to serialize user: {err}"),
        }
        self.store.write(TOKEN_KEY, &token);
        *self.current.lock().unwrap() = Some(Account { user, token });
    }

    /// Clear the session and its persisted storage. Idempotent.
    pub fn logout(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(TOKEN_KEY);
        *self.current.lock().unwrap() = None;
    }

    pub fn account(&self) -> Option<Account> {
        self.current.lock().unwrap().clone()
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.account().map(|account| account.user)
    }

    pub fn token(&self) -> Option<String> {
        self.account().map(|account| account.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str) -> UserSummary {
        UserSummary {
            id,
            username: username.to_string(),
        }
    }

    #[test]
    fn login_persists_and_restore_roundtrips() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.login(user(1, "frodo"), "tok-123".to_string());
        assert_eq!(session.token().as_deref(), Some("tok-123"));

        // A fresh session over the same store, as after a page reload.
        let reloaded = Session::new(store);
        reloaded.restore();
        assert_eq!(reloaded.account(), session.account());
    }

    #[test]
    fn restore_of_empty_store_stays_logged_out() {
        let session = Session::new(MemoryStore::new());
        session.restore();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn half_present_state_is_cleared() {
        let store = MemoryStore::new();
        store.write(TOKEN_KEY, "orphan");
        let session = Session::new(store.clone());
        session.restore();
        assert!(!session.is_authenticated());
        assert_eq!(store.read(TOKEN_KEY), None);

        store.write(USER_KEY, "not json");
        store.write(TOKEN_KEY, "tok");
        session.restore();
        assert!(!session.is_authenticated());
        assert_eq!(store.read(USER_KEY), None);
        assert_eq!(store.read(TOKEN_KEY), None);
    }

    #[test]
    fn logout_clears_storage_and_is_idempotent() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.login(user(2, "sam"), "tok".to_string());
        session.logout();
        assert!(store.read(USER_KEY).is_none());
        assert!(store.read(TOKEN_KEY).is_none());

        // Logging out while logged out is a no-op, not an error.
        session.logout();
        assert!(!session.is_authenticated());
    }
}
