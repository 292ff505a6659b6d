//! Locale and translation error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Locale errors
#[derive(Debug, Error)]
pub enum LocaleError {
    /// Language code not in the available-language table
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// Preference persistence failed
    #[error("locale storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for locale operations
pub type LocaleResult<T> = Result<T, LocaleError>;

/// Translation failure. Callers degrade to the original text; this error
/// never reaches the end user.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The translator has no translation for this text/language pair
    #[error("no translation available for language {0}")]
    Unavailable(String),
}
