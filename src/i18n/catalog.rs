//! Catalog: the backing store for texts and words.
//!
//! A catalog answers one question: given a language and an id, which string
//! is stored there, if any. `MemoryCatalog` keeps everything in memory and
//! can be seeded from a JSON file.

use crate::date;
use crate::error::{BabelError, Result};
use crate::i18n::{Language, LanguageId, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Opaque numeric identifier of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextId(u32);

impl TextId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque numeric identifier of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(u32);

impl WordId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of languages, texts and words.
pub trait Catalog {
    fn language(&self, id: LanguageId) -> Option<&Language>;

    fn language_by_code(&self, code: &str) -> Option<&Language>;

    fn text(&self, language: LanguageId, id: TextId) -> Option<&str>;

    fn word(&self, language: LanguageId, id: WordId) -> Option<&str>;
}

impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    fn language(&self, id: LanguageId) -> Option<&Language> {
        (**self).language(id)
    }

    fn language_by_code(&self, code: &str) -> Option<&Language> {
        (**self).language_by_code(code)
    }

    fn text(&self, language: LanguageId, id: TextId) -> Option<&str> {
        (**self).text(language, id)
    }

    fn word(&self, language: LanguageId, id: WordId) -> Option<&str> {
        (**self).word(language, id)
    }
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    registry: LanguageRegistry,
    texts: BTreeMap<(LanguageId, TextId), String>,
    words: BTreeMap<(LanguageId, WordId), String>,
}

/// On-disk shape of a seed catalog. Texts and words are keyed by language code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub languages: Vec<Language>,

    #[serde(default)]
    pub texts: BTreeMap<String, BTreeMap<TextId, String>>,

    #[serde(default)]
    pub words: BTreeMap<String, BTreeMap<WordId, String>>,
}

impl MemoryCatalog {
    /// Create a catalog over an existing registry, with no entries.
    pub fn new(registry: LanguageRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Register a language.
    ///
    /// # Errors
    /// `UnknownLocale` if chrono has no data for the language's locale,
    /// `DuplicateLanguage` if the id or code is taken.
    pub fn add_language(&mut self, language: Language) -> Result<()> {
        date::resolve_locale(&language.locale)?;
        self.registry.insert(language)
    }

    /// Store a text, replacing any previous value.
    pub fn add_text(&mut self, language: LanguageId, id: TextId, text: impl Into<String>) -> Result<()> {
        self.ensure_language(language)?;
        self.texts.insert((language, id), text.into());
        Ok(())
    }

    /// Store a word, replacing any previous value.
    pub fn add_word(&mut self, language: LanguageId, id: WordId, word: impl Into<String>) -> Result<()> {
        self.ensure_language(language)?;
        self.words.insert((language, id), word.into());
        Ok(())
    }

    /// Builder-style `add_text`.
    pub fn with_text(mut self, language: LanguageId, id: TextId, text: impl Into<String>) -> Result<Self> {
        self.add_text(language, id, text)?;
        Ok(self)
    }

    /// Builder-style `add_word`.
    pub fn with_word(mut self, language: LanguageId, id: WordId, word: impl Into<String>) -> Result<Self> {
        self.add_word(language, id, word)?;
        Ok(self)
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// All texts stored for one language, ordered by id.
    pub fn texts_for(&self, language: LanguageId) -> impl Iterator<Item = (TextId, &str)> + '_ {
        self.texts
            .range((language, TextId::new(0))..=(language, TextId::new(u32::MAX)))
            .map(|((_, id), text)| (*id, text.as_str()))
    }

    /// All words stored for one language, ordered by id.
    pub fn words_for(&self, language: LanguageId) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.words
            .range((language, WordId::new(0))..=(language, WordId::new(u32::MAX)))
            .map(|((_, id), word)| (*id, word.as_str()))
    }

    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Build a catalog from its file representation.
    pub fn from_file_contents(file: CatalogFile) -> Result<Self> {
        let mut catalog = Self::default();
        for language in file.languages {
            catalog.add_language(language)?;
        }

        for (code, texts) in file.texts {
            let language = catalog.language_id_for(&code)?;
            for (id, text) in texts {
                catalog.texts.insert((language, id), text);
            }
        }

        for (code, words) in file.words {
            let language = catalog.language_id_for(&code)?;
            for (id, word) in words {
                catalog.words.insert((language, id), word);
            }
        }

        debug!(
            "Loaded catalog with {} languages, {} texts, {} words",
            catalog.registry.len(),
            catalog.texts.len(),
            catalog.words.len()
        );

        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file_contents(file)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BabelError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read catalog file {}", path.display());
        Self::from_json(&json)
    }

    /// Convert back into the file representation.
    pub fn to_file_contents(&self) -> CatalogFile {
        let mut file = CatalogFile {
            languages: self.registry.list_all().into_iter().cloned().collect(),
            ..CatalogFile::default()
        };
        for language in self.registry.list_all() {
            let texts: BTreeMap<_, _> = self
                .texts_for(language.id)
                .map(|(id, text)| (id, text.to_string()))
                .collect();
            if !texts.is_empty() {
                file.texts.insert(language.code.clone(), texts);
            }
            let words: BTreeMap<_, _> = self
                .words_for(language.id)
                .map(|(id, word)| (id, word.to_string()))
                .collect();
            if !words.is_empty() {
                file.words.insert(language.code.clone(), words);
            }
        }
        file
    }

    fn ensure_language(&self, language: LanguageId) -> Result<()> {
        if self.registry.contains(language) {
            Ok(())
        } else {
            Err(BabelError::UnknownLanguage(language))
        }
    }

    fn language_id_for(&self, code: &str) -> Result<LanguageId> {
        self.registry
            .get_by_code(code)
            .map(|lang| lang.id)
            .ok_or_else(|| BabelError::UnknownLanguageCode(code.to_string()))
    }
}

impl Catalog for MemoryCatalog {
    fn language(&self, id: LanguageId) -> Option<&Language> {
        self.registry.get(id)
    }

    fn language_by_code(&self, code: &str) -> Option<&Language> {
        self.registry.get_by_code(code)
    }

    fn text(&self, language: LanguageId, id: TextId) -> Option<&str> {
        self.texts.get(&(language, id)).map(String::as_str)
    }

    fn word(&self, language: LanguageId, id: WordId) -> Option<&str> {
        self.words.get(&(language, id)).map(String::as_str)
    }
}
