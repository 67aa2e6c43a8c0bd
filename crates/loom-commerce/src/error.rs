//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never fail for domain reasons (bad quantities and unknown
/// ids are no-ops); their errors come from the storage layers below.
/// [`CommerceError::ProductNotFound`] is raised by catalog lookups.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Session storage error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<loom_cache::CacheError> for CommerceError {
    fn from(e: loom_cache::CacheError) -> Self {
        match e {
            loom_cache::CacheError::Serialize(e) => CommerceError::from(e),
            other => CommerceError::CacheError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
