//! Node error types

use thiserror::Error;

/// Node error type
#[derive(Debug, Error)]
pub enum NodeError {
    /// Config error
    #[error("Config error: {0}")]
    Config(String),

    /// Config file parse error
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] balance_storage::StorageError),
}
