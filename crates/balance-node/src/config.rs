//! Configuration for balancemgr

use crate::error::NodeError;
use balance_core::ContractConfig;
use balance_storage::DbConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Node configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Data directory
    #[serde(default = "default_datadir")]
    pub datadir: PathBuf,
    /// Log level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Contract settings
    #[serde(default)]
    pub contract: ContractConfig,
    /// RocksDB tuning
    #[serde(default)]
    pub database: DatabaseConfig,
}

fn default_datadir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            datadir: default_datadir(),
            log_level: default_log_level(),
            contract: ContractConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

/// RocksDB settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Maximum number of open files
    pub max_open_files: i32,
    /// Write buffer size in bytes
    pub write_buffer_size: usize,
    /// Maximum write buffers
    pub max_write_buffer_number: i32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let db = DbConfig::default();
        Self {
            max_open_files: db.max_open_files,
            write_buffer_size: db.write_buffer_size,
            max_write_buffer_number: db.max_write_buffer_number,
        }
    }
}

impl DatabaseConfig {
    /// Convert to storage options
    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            create_if_missing: true,
            max_open_files: self.max_open_files,
            write_buffer_size: self.write_buffer_size,
            max_write_buffer_number: self.max_write_buffer_number,
        }
    }
}

impl NodeConfig {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".balancemgr"))
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default path
    /// is read if present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, NodeError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, NodeError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NodeError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, NodeError> {
        toml::to_string_pretty(self).map_err(|e| NodeError::Config(e.to_string()))
    }
}
