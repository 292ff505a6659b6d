//! Locale manager implementation.

use super::{
    errors::{LocaleError, LocaleResult},
    models::{available_languages, language_by_code, Language, DEFAULT_LANGUAGE},
    translator::Translator,
};
use crate::storage::{KeyValueStore, LANGUAGE_KEY};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Locale manager
///
/// Tracks the selected display language, persists it under
/// [`LANGUAGE_KEY`], and translates display text through the injected
/// [`Translator`]. Translation failures degrade silently to the input.
#[derive(Clone)]
pub struct LocaleManager {
    store: Arc<dyn KeyValueStore>,
    translator: Arc<dyn Translator>,
    current: Arc<RwLock<Language>>,
}

impl LocaleManager {
    /// Create a locale manager, restoring any persisted language
    /// preference. An unknown or unreadable stored code falls back to the
    /// default language.
    pub fn new(store: Arc<dyn KeyValueStore>, translator: Arc<dyn Translator>) -> Self {
        let current = restore_language(store.as_ref());
        Self {
            store,
            translator,
            current: Arc::new(RwLock::new(current)),
        }
    }

    /// The fixed table of selectable languages.
    pub fn available_languages(&self) -> Vec<Language> {
        available_languages()
    }

    /// The currently selected display language.
    pub async fn current_language(&self) -> Language {
        self.current.read().await.clone()
    }

    /// Select a display language by code and persist the preference.
    ///
    /// # Errors
    ///
    /// * `LocaleError::UnknownLanguage` - code not in the language table
    /// * `LocaleError::Storage` - preference could not be persisted
    pub async fn change_language(&self, code: &str) -> LocaleResult<Language> {
        let language =
            language_by_code(code).ok_or_else(|| LocaleError::UnknownLanguage(code.to_string()))?;

        self.store.set(LANGUAGE_KEY, &language.code)?;
        *self.current.write().await = language.clone();
        Ok(language)
    }

    /// Translate `text` into the currently selected language.
    pub async fn translate(&self, text: &str) -> String {
        let target = self.current.read().await.code.clone();
        self.translate_to(text, &target).await
    }

    /// Translate `text` into `target`, degrading to the original text when
    /// the translator cannot help. The default language passes through.
    pub async fn translate_to(&self, text: &str, target: &str) -> String {
        if target == DEFAULT_LANGUAGE {
            return text.to_string();
        }

        match self.translator.translate(text, target).await {
            Ok(translated) => translated,
            Err(e) => {
                debug!("translation fell back to original text: {e}");
                text.to_string()
            }
        }
    }
}

fn restore_language(store: &dyn KeyValueStore) -> Language {
    let fallback = language_by_code(DEFAULT_LANGUAGE).expect("default language is in the table");

    match store.get(LANGUAGE_KEY) {
        Ok(Some(code)) => language_by_code(&code).unwrap_or_else(|| {
            warn!("discarding unknown persisted language code: {code}");
            fallback
        }),
        Ok(None) => fallback,
        Err(e) => {
            warn!("locale storage unavailable: {e}");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::translator::MockTranslator;
    use crate::storage::MemoryStore;

    fn manager_with_store(store: Arc<MemoryStore>) -> LocaleManager {
        LocaleManager::new(store, Arc::new(MockTranslator::new()))
    }

    #[tokio::test]
    async fn defaults_to_english() {
        let manager = manager_with_store(Arc::new(MemoryStore::new()));
        assert_eq!(manager.current_language().await.code, "en");
        assert_eq!(manager.available_languages().len(), 12);
    }

    #[tokio::test]
    async fn change_language_persists_across_restart() {
        let store = Arc::new(MemoryStore::new());

        let manager = manager_with_store(store.clone());
        manager.change_language("es").await.unwrap();

        let restarted = manager_with_store(store);
        assert_eq!(restarted.current_language().await.code, "es");
    }

    #[tokio::test]
    async fn unknown_language_code_is_rejected() {
        let manager = manager_with_store(Arc::new(MemoryStore::new()));
        let err = manager.change_language("xx").await.unwrap_err();
        assert!(matches!(err, LocaleError::UnknownLanguage(_)));
        assert_eq!(manager.current_language().await.code, "en");
    }

    #[tokio::test]
    async fn unknown_persisted_code_falls_back_to_default() {
        let store = Arc::new(MemoryStore::new());
        store.set(LANGUAGE_KEY, "klingon").unwrap();

        let manager = manager_with_store(store);
        assert_eq!(manager.current_language().await.code, "en");
    }

    #[tokio::test]
    async fn translate_uses_selected_language() {
        let manager = manager_with_store(Arc::new(MemoryStore::new()));
        manager.change_language("es").await.unwrap();

        let translated = manager.translate("Furniture donation pickup").await;
        assert_eq!(translated, "Recogida de donación de muebles");
    }

    #[tokio::test]
    async fn translate_degrades_silently_to_original() {
        let manager = manager_with_store(Arc::new(MemoryStore::new()));
        manager.change_language("ja").await.unwrap();

        let text = "Untranslatable neighborhood notice";
        assert_eq!(manager.translate(text).await, text);
    }

    #[tokio::test]
    async fn english_passes_through() {
        let manager = manager_with_store(Arc::new(MemoryStore::new()));
        let text = "Need help with grocery shopping";
        assert_eq!(manager.translate_to(text, "en").await, text);
    }
}
