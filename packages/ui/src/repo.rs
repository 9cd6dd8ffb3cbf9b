//! Platform-specific construction of the session store and config.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage`
//! - **Desktop** (native): a token file under `<data_dir>/apartments/`

use std::rc::Rc;

use store::ClientConfig;

use crate::SharedStore;

/// Create the platform-appropriate session store.
pub fn make_session_store(config: &ClientConfig) -> SharedStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::with_key(
            config.session.storage_key.clone(),
        ))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        Rc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("apartments");
        Rc::new(store::FileStore::with_key(
            base,
            config.session.storage_key.clone(),
        ))
    }
}

/// Load the client config for this platform.
///
/// Native builds read `<config_dir>/apartments/apartments.toml` when it
/// exists. Both platforms let `APARTMENTS_API_URL` override the base URL:
/// at runtime on native, at compile time on web.
pub fn load_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let config = ClientConfig::default();
        match option_env!("APARTMENTS_API_URL") {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("apartments")
            .join(ClientConfig::filename());
        let config = match ClientConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                ClientConfig::default()
            }
        };
        match std::env::var("APARTMENTS_API_URL") {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }
}
