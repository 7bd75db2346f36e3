//! Domain error types.

use thiserror::Error;

use crate::models::validation::ValidationIssue;

/// Failure reported by a storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The looked-up or referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend could not serve the request.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a catalog operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// One or more submission fields broke the intake rules. Nothing was written.
    #[error("{} validation error(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Anything else, typically storage being unavailable.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => CatalogError::NotFound(msg),
            StoreError::Unavailable(msg) => CatalogError::Unexpected(msg),
        }
    }
}
