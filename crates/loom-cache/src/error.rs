//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using session storage.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to read or write the backing files.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend refused the operation.
    #[error("Store operation failed: {0}")]
    Store(String),
}
