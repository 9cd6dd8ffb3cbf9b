//! # Filesystem-backed session store
//!
//! [`FileStore`] keeps the session token in a single file so desktop builds
//! stay signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # the raw token, no trailing newline
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/apartments/` on Linux.

use std::path::PathBuf;

use crate::session_store::{SessionStore, DEFAULT_TOKEN_KEY};

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self::with_key(base, DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(base: PathBuf, key: impl Into<String>) -> Self {
        Self {
            base,
            key: key.into(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) {
        let path = self.token_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, token) {
            tracing::warn!("Failed to persist session to {}: {}", path.display(), e);
        }
    }

    fn clear(&self) {
        let path = self.token_path();
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session {}: {}", path.display(), e),
        }
    }
}
