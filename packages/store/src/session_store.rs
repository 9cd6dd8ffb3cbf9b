//! The persisted session slot.
//!
//! A [`SessionStore`] holds at most one bearer token. It does not look inside
//! the token or enforce expiry; that is the session manager's job. Writes are
//! last-writer-wins with no versioning.

use std::rc::Rc;
use std::sync::Arc;

/// Well-known key the token is stored under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Key/value slot for the current session token.
pub trait SessionStore {
    /// The stored token, if any.
    fn load(&self) -> Option<String>;
    /// Replace the stored token.
    fn save(&self, token: &str);
    /// Remove the stored token. A no-op when nothing is stored.
    fn clear(&self);
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) {
        (**self).save(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) {
        (**self).save(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
