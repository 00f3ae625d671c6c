//! Error type shared by every lookup, formatting and catalog operation.

use crate::i18n::{LanguageId, TextId, WordId};
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T, E = BabelError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum BabelError {
    #[error("Text {id} not found in language {language}")]
    UnknownText { language: LanguageId, id: TextId },

    #[error("Word {id} not found in language {language}")]
    UnknownWord { language: LanguageId, id: WordId },

    #[error("Unknown language: {0}")]
    UnknownLanguage(LanguageId),

    #[error("Unknown language code: '{0}'")]
    UnknownLanguageCode(String),

    #[error("Language '{0}' is already registered")]
    DuplicateLanguage(String),

    /// Popping would remove the default language.
    #[error("Cannot pop the default language off the language stack")]
    StackUnderflow,

    #[error("Format requires argument {needed} but only {supplied} supplied")]
    ArgumentCount { needed: usize, supplied: usize },

    #[error("Argument {index} ('{value}') is not valid for conversion %{conversion}")]
    ArgumentType {
        index: usize,
        conversion: char,
        value: String,
    },

    #[error("Malformed format at byte {position}: {reason}")]
    MalformedFormat {
        position: usize,
        reason: &'static str,
    },

    #[error("Invalid date style: {0} (expected 1..=4)")]
    InvalidDateStyle(i32),

    #[error("Unknown date style: '{0}'")]
    UnknownDateStyle(String),

    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Invalid date pattern: '{0}'")]
    InvalidDatePattern(String),

    #[error("Failed to read catalog file {}", path.display())]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}

impl BabelError {
    /// True for the "not found" family (text, word or language).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BabelError::UnknownText { .. }
                | BabelError::UnknownWord { .. }
                | BabelError::UnknownLanguage(_)
                | BabelError::UnknownLanguageCode(_)
        )
    }
}
