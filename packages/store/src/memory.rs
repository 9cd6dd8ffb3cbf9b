use std::sync::{Arc, Mutex};

use crate::session_store::SessionStore;

/// In-memory SessionStore for testing. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.save(&token.into());
        store
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.lock().unwrap().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        store.save("a.b.c");
        assert_eq!(store.load().as_deref(), Some("a.b.c"));

        // Last writer wins
        store.save("d.e.f");
        assert_eq!(store.load().as_deref(), Some("d.e.f"));

        store.clear();
        assert!(store.load().is_none());

        // Clearing an empty store is fine
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryStore::with_token("x.y.z");
        let other = store.clone();
        other.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_through_arc_dyn() {
        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
        store.save("t.o.k");
        assert_eq!(store.load().as_deref(), Some("t.o.k"));
    }
}
