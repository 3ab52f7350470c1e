//! Host configuration: listener address plus the search core settings.
//!
//! Persisted as TOML:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [search]
//! timeout_seconds = 10
//! icon_fetch_cap = 200
//! ```

use std::path::{Path, PathBuf};

use hunter_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::{HunterError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HUNTER_CONFIG";

/// Top-level configuration for the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HunterConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Upstream and pagination settings for the search core.
    pub search: SearchConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl HunterConfig {
    /// Validate the listener and search settings.
    ///
    /// # Errors
    ///
    /// Returns [`HunterError::Config`] for an empty host, or
    /// [`HunterError::Search`] if the search settings are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(HunterError::Config("server.host must not be empty".into()));
        }
        self.search.validate()?;
        Ok(())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| HunterError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| HunterError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/icon-hunter/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("icon-hunter").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("icon-hunter")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/icon-hunter-config/config.toml")
        }
    }

    /// Resolve which file to load.
    ///
    /// An explicit path (CLI argument, then [`CONFIG_ENV_VAR`]) always wins
    /// and must exist. Otherwise the default path is used if present.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
            .or_else(|| {
                let default = Self::default_config_path();
                default.exists().then_some(default)
            })
    }

    /// Load from the resolved path, or fall back to defaults when none
    /// applies. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a resolved file cannot be loaded or the
    /// resulting configuration is invalid.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self> {
        let config = match Self::resolve_path(explicit) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading config");
                Self::from_file(&path)?
            }
            None => {
                tracing::info!("no config file found, using defaults");
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }
}
