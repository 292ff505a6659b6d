//! Translation capability and the mock implementation.

use super::errors::TranslationError;
use async_trait::async_trait;

/// A translation backend.
///
/// `target` is a language code from the available-language table. The
/// returned text is the translation; implementations report
/// [`TranslationError::Unavailable`] when they cannot translate, and the
/// caller falls back to the original text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslationError>;
}

/// Phrase-table translator standing in for a real translation service.
///
/// Covers the seeded request titles in Spanish, French, and German; anything
/// else is unavailable.
#[derive(Debug, Default)]
pub struct MockTranslator;

impl MockTranslator {
    pub fn new() -> Self {
        Self
    }
}

const ES: &[(&str, &str)] = &[
    ("Need help with grocery shopping", "Necesito ayuda con las compras"),
    (
        "Math tutoring for high school student",
        "Tutoría de matemáticas para estudiante de secundaria",
    ),
    ("Furniture donation pickup", "Recogida de donación de muebles"),
    ("Computer repair assistance", "Asistencia para reparación de computadoras"),
    ("Companion for elderly parent", "Compañía para padre anciano"),
    ("Dog walking service needed", "Se necesita servicio de paseo de perros"),
    ("Piano lessons for beginner", "Clases de piano para principiantes"),
    ("Garden tools to donate", "Herramientas de jardín para donar"),
];

const FR: &[(&str, &str)] = &[
    ("Need help with grocery shopping", "Besoin d'aide pour faire les courses"),
    (
        "Math tutoring for high school student",
        "Tutorat en mathématiques pour lycéen",
    ),
    ("Furniture donation pickup", "Collecte de don de meubles"),
    ("Computer repair assistance", "Assistance pour réparation d'ordinateur"),
    ("Companion for elderly parent", "Compagnon pour parent âgé"),
    ("Dog walking service needed", "Service de promenade de chien nécessaire"),
    ("Piano lessons for beginner", "Cours de piano pour débutant"),
    ("Garden tools to donate", "Outils de jardinage à donner"),
];

const DE: &[(&str, &str)] = &[
    ("Need help with grocery shopping", "Hilfe beim Einkaufen benötigt"),
    (
        "Math tutoring for high school student",
        "Mathe-Nachhilfe für Gymnasiasten",
    ),
    ("Furniture donation pickup", "Möbelspende abholen"),
    ("Computer repair assistance", "Computer-Reparatur-Hilfe"),
    ("Companion for elderly parent", "Begleitung für ältere Eltern"),
    ("Dog walking service needed", "Hundeausführ-Service benötigt"),
    ("Piano lessons for beginner", "Klavierunterricht für Anfänger"),
    ("Garden tools to donate", "Gartenwerkzeuge zu spenden"),
];

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslationError> {
        let table = match target {
            "es" => ES,
            "fr" => FR,
            "de" => DE,
            _ => return Err(TranslationError::Unavailable(target.to_string())),
        };

        table
            .iter()
            .find(|(source, _)| *source == text)
            .map(|(_, translated)| (*translated).to_string())
            .ok_or_else(|| TranslationError::Unavailable(target.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_phrases_translate() {
        let translator = MockTranslator::new();
        let translated = translator
            .translate("Furniture donation pickup", "es")
            .await
            .unwrap();
        assert_eq!(translated, "Recogida de donación de muebles");
    }

    #[tokio::test]
    async fn unknown_language_is_unavailable() {
        let translator = MockTranslator::new();
        let err = translator
            .translate("Furniture donation pickup", "ja")
            .await
            .unwrap_err();
        assert!(matches!(err, TranslationError::Unavailable(_)));
    }
}
