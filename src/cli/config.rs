//! Service configuration
//!
//! JSON file, every field optional:
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8000, "cors_origins": [] },
//!   "storage": { "backend": "file", "data_dir": "./data" },
//!   "log_filter": "info"
//! }
//! ```
//!
//! Command-line flags override file values. The merged result is validated
//! before anything is opened.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::DEFAULT_LOG_FILTER;

/// Which record store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}

/// Record store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding the string log (file backend only)
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            storage: StorageConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

/// Values given on the `serve` command line
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
    pub memory: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> CliResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Loads the file if given (defaults otherwise), applies overrides and
    /// validates the result.
    pub fn resolve(path: Option<&Path>, overrides: ServeOverrides) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.apply(overrides);
        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides
    pub fn apply(&mut self, overrides: ServeOverrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(data_dir) = overrides.data_dir {
            self.storage.data_dir = data_dir.to_string_lossy().into_owned();
        }
        if overrides.memory {
            self.storage.backend = StorageBackend::Memory;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if self.storage.backend == StorageBackend::File && self.storage.data_dir.trim().is_empty()
        {
            return Err(CliError::config_error(
                "storage.data_dir must not be empty for the file backend",
            ));
        }

        Ok(())
    }
}
