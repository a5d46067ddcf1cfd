//! Startup configuration
//!
//! Resolved once, in this order (later wins):
//! 1. Built-in defaults
//! 2. TOML file (explicit path, or `~/.webgame/config.toml` when present)
//! 3. Environment: `DATABASE_URL`, `WEBGAME_BIND`
//!
//! Example file:
//!
//! ```toml
//! [server]
//! bind_addr = "0.0.0.0:5000"
//! cors_permissive = false
//!
//! [database]
//! url = "mysql://root@localhost:3306/WebGame"
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::http::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind_addr: SocketAddr,
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            bind_addr: defaults.bind_addr,
            cors_permissive: defaults.cors_permissive,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
}

impl AppConfig {
    /// Load from `path` if given, else from the default path if it exists,
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.with_overrides(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("WEBGAME_BIND").ok(),
        )
    }

    /// Config file path: ~/.webgame/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".webgame/config.toml")
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides; `None` leaves the current value alone.
    pub fn with_overrides(
        mut self,
        database_url: Option<String>,
        bind_addr: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = database_url.filter(|u| !u.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(value) = bind_addr {
            self.server.bind_addr = value
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?;
        }
        Ok(self)
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.server.bind_addr,
            cors_permissive: self.server.cors_permissive,
        }
    }
}
