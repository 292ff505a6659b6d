//! Catalog error types.

use super::models::{PaymentType, RequestId};
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request title missing or blank
    #[error("title must not be empty")]
    EmptyTitle,

    /// Request description missing or blank
    #[error("description must not be empty")]
    EmptyDescription,

    /// Request description over the policy limit
    #[error("description is {len} characters, the limit is {max}")]
    DescriptionTooLong { len: usize, max: usize },

    /// Request location missing or blank
    #[error("location must not be empty")]
    EmptyLocation,

    /// Paid request submitted without an amount
    #[error("a suggested amount is required for {payment_type} requests")]
    MissingAmount { payment_type: PaymentType },

    /// Amount must be positive
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    /// No request with the given id
    #[error("request not found: {0}")]
    RequestNotFound(RequestId),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
