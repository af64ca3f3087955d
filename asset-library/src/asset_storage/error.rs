//! Error types for asset storage operations

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while talking to the object store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The request never produced a service response (network, timeout, credentials)
    #[error("Storage request failed: {0}")]
    Request(String),

    /// Presigned URL generation failed
    #[error("Presigning failed: {0}")]
    Presign(String),

    /// Invalid client or presigning configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
