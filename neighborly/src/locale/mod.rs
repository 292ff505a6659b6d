//! Locale store and translation lookup.
//!
//! Holds the selected display language (persisted under the language key)
//! and translates display text through an injected [`Translator`]. A failed
//! or unavailable translation degrades silently to the original text and is
//! never surfaced to the end user.

pub mod errors;
pub mod manager;
pub mod models;
pub mod translator;

pub use errors::{LocaleError, LocaleResult, TranslationError};
pub use manager::LocaleManager;
pub use models::{available_languages, Language, DEFAULT_LANGUAGE};
pub use translator::{MockTranslator, Translator};
