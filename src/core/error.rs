//! Typed errors for the loading boundary
//!
//! The view engine itself never fails; invalid selections degrade to the
//! unchanged record order. Errors only arise when records or configuration
//! are read from outside the process.

use thiserror::Error;

/// Errors raised while loading records or configuration
#[derive(Debug, Error)]
pub enum TableError {
    /// The record or config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The record payload is not a list of users
    #[error("invalid record payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configuration is not valid YAML for this crate
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl TableError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::Io { .. } => "IO_ERROR",
            TableError::Decode(_) => "DECODE_ERROR",
            TableError::Config(_) => "CONFIG_ERROR",
        }
    }
}
