//! Error types for timeline core operations

use thiserror::Error;

/// Errors that can occur at the store boundary
///
/// The derived-state pipeline (aggregation, search, resolution) is total and
/// never produces errors; these variants cover the write boundary and the
/// snapshot subscription only.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Draft or patch rejected before any store call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced event does not exist in the store
    #[error("Event not found: {0}")]
    NotFound(String),

    /// Backing store rejected a create/update/delete
    #[error("Storage error: {0}")]
    Storage(String),

    /// Snapshot subscription could not be established or was lost
    #[error("Subscription error: {0}")]
    Subscription(String),

    /// Blob upload failed
    #[error("Upload error: {0}")]
    Upload(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for timeline core operations
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}
