//! Language registry: the set of languages a catalog knows about.
//!
//! Each catalog owns its own registry; there is no process-wide instance.
//! Ids and codes are unique within a registry.

use crate::error::{BabelError, Result};
use crate::i18n::{Direction, Language, LanguageId};

/// Ordered collection of languages, addressable by id and by code.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the built-in languages (English, Dutch,
    /// Spanish and Arabic).
    pub fn builtin() -> Self {
        Self {
            languages: default_languages(),
        }
    }

    /// Add a language.
    ///
    /// # Errors
    /// `DuplicateLanguage` if the id or the code is already registered.
    pub fn insert(&mut self, language: Language) -> Result<()> {
        if self
            .languages
            .iter()
            .any(|lang| lang.id == language.id || lang.code == language.code)
        {
            return Err(BabelError::DuplicateLanguage(language.code));
        }
        self.languages.push(language);
        Ok(())
    }

    /// Get a language by its id.
    pub fn get(&self, id: LanguageId) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.id == id)
    }

    /// Get a language by its internal code (e.g., "en", "nl-be").
    pub fn get_by_code(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    pub fn contains(&self, id: LanguageId) -> bool {
        self.get(id).is_some()
    }

    /// All languages in registration order.
    pub fn list_all(&self) -> Vec<&Language> {
        self.languages.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Built-in language definitions.
fn default_languages() -> Vec<Language> {
    vec![
        Language::new(LanguageId::new(1), "en", "English", "en_US"),
        Language::new(LanguageId::new(2), "nl", "Dutch", "nl_NL").with_native_name("Nederlands"),
        Language::new(LanguageId::new(3), "es", "Spanish", "es_ES").with_native_name("Español"),
        Language::new(LanguageId::new(4), "ar", "Arabic", "ar_SA")
            .with_native_name("العربية")
            .with_direction(Direction::Rtl),
    ]
}
