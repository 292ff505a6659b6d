//! Payment error types.

use thiserror::Error;

/// Payment errors
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Amount must be positive
    #[error("invalid payment amount: {0}")]
    InvalidAmount(f64),

    /// The upstream processor rejected the attempt
    #[error("payment rejected: {0}")]
    Rejected(String),
}

/// Result type for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
