//! Error types for vansh-graph
//!
//! Tree building and relationship lookups never fail; errors only come from
//! the edges (input files, configuration, the member source, output).

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::{SerialKey, SerialKeyError};

/// Main error type for vansh-graph operations
#[derive(Debug, Error)]
pub enum VanshError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A serial number given on the command line did not parse
    #[error("Parse error: {0}")]
    Parse(#[from] SerialKeyError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Member source error
    #[error("Storage error: {0}")]
    Storage(#[from] vansh_storage::StorageError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Focal member absent from the requested vansh
    #[error("Member {ser_no} not found in vansh {vansh}")]
    MemberNotFound { ser_no: SerialKey, vansh: String },
}

/// Result type alias for vansh-graph operations
pub type Result<T> = std::result::Result<T, VanshError>;
