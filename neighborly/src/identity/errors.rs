//! Identity error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Identity errors
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Credential is not a decodable three-segment signed token
    #[error("credential is not a well-formed identity token")]
    MalformedCredential,

    /// Credential decoded but a required claim is absent
    #[error("credential is missing the {0} claim")]
    MissingClaim(&'static str),

    /// Session persistence failed
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for identity operations
pub type IdentityResult<T> = Result<T, IdentityError>;
