//! Store errors

use thiserror::Error;

use super::customer::CustomerId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by a [`CustomerStore`](super::CustomerStore)
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Create requested for an id already present
    #[error("Customer with id {0} already exists")]
    DuplicateKey(CustomerId),

    /// Get, update or delete requested for an absent id
    #[error("Customer with id {0} not found")]
    NotFound(CustomerId),

    /// The backing container is unusable
    #[error("Store error: {0}")]
    Internal(String),
}
