//! # Client configuration: `apartments.toml`
//!
//! Where the apartments API lives and where the session token is kept.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://192.168.8.165:5000"
//!
//! [session]
//! storage_key = "token"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers, TOML (de)serialisation and file loading. |
//! | [`ApiConfig`] | Base URL of the REST API, plus [`ApiConfig::endpoint`] for joining paths. |
//! | [`SessionConfig`] | Key of the persisted token slot. |
//!
//! Every section has a `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::session_store::DEFAULT_TOKEN_KEY;

/// Errors while reading `apartments.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `apartments.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// REST API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and optional port; a trailing slash is ignored.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://192.168.8.165:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Join `path` (with or without a leading slash) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point at a different API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "apartments.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read a config file. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::from_toml(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://192.168.8.165:5000");
        assert_eq!(config.session.storage_key, "token");
    }

    #[test]
    fn test_partial_toml() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"https://api.example.com/\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/");
        assert_eq!(config.session.storage_key, "token");
        assert_eq!(
            config.api.endpoint("/apartments"),
            "https://api.example.com/apartments"
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://localhost:5000");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let path = std::env::temp_dir().join(format!(
            "apartments_missing_{}/{}",
            std::process::id(),
            ClientConfig::filename()
        ));
        assert_eq!(ClientConfig::load(&path).unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = std::env::temp_dir().join(format!("apartments_badcfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(ClientConfig::filename());
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();
        assert!(matches!(ClientConfig::load(&path), Err(ConfigError::Parse(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
