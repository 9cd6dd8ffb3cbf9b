//! Browser `localStorage`-backed session store for the web build.
//!
//! The token survives page reloads within the same browser profile. Any
//! failure to reach `localStorage` (private mode, disabled storage) reads as
//! "no session" and drops writes with a warning.

use web_sys::Storage;

use crate::session_store::{SessionStore, DEFAULT_TOKEN_KEY};

#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session not persisted");
            return;
        };
        if storage.set_item(&self.key, token).is_err() {
            tracing::warn!("Failed to write session to localStorage");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
