//! Error types for relaytext

use thiserror::Error;

/// Main error type for relaytext operations
#[derive(Error, Debug)]
pub enum RelayError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for relaytext operations
pub type Result<T> = std::result::Result<T, RelayError>;
