//! Locale data models.

use serde::{Deserialize, Serialize};

/// Code of the language everything is authored in by default.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A display language.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub flag: String,
}

const LANGUAGES: &[(&str, &str, &str, &str)] = &[
    ("en", "English", "English", "🇺🇸"),
    ("es", "Spanish", "Español", "🇪🇸"),
    ("fr", "French", "Français", "🇫🇷"),
    ("de", "German", "Deutsch", "🇩🇪"),
    ("it", "Italian", "Italiano", "🇮🇹"),
    ("pt", "Portuguese", "Português", "🇵🇹"),
    ("ru", "Russian", "Русский", "🇷🇺"),
    ("zh", "Chinese", "中文", "🇨🇳"),
    ("ja", "Japanese", "日本語", "🇯🇵"),
    ("ko", "Korean", "한국어", "🇰🇷"),
    ("ar", "Arabic", "العربية", "🇸🇦"),
    ("hi", "Hindi", "हिन्दी", "🇮🇳"),
];

/// The fixed table of selectable display languages.
pub fn available_languages() -> Vec<Language> {
    LANGUAGES
        .iter()
        .map(|(code, name, native_name, flag)| Language {
            code: (*code).to_string(),
            name: (*name).to_string(),
            native_name: (*native_name).to_string(),
            flag: (*flag).to_string(),
        })
        .collect()
}

/// Look up a language by code.
pub fn language_by_code(code: &str) -> Option<Language> {
    available_languages()
        .into_iter()
        .find(|language| language.code == code)
}
