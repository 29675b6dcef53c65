//! Lumi core error types

use thiserror::Error;

/// Lumi core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Registration attempted with an email already in the directory
    #[error("An account with this email already exists")]
    DuplicateAccount,

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Assistant collaborator error
    #[error("Assistant error: {0}")]
    Assistant(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Lumi core operations
pub type Result<T> = std::result::Result<T, Error>;
