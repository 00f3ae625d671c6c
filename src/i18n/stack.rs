//! Language stack: the current language plus the ones it temporarily
//! overrides.
//!
//! The bottom element is the default language and can never be popped, so
//! the stack is never empty and its top is always the current language.

use crate::error::{BabelError, Result};
use crate::i18n::LanguageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStack {
    // Invariant: never empty.
    languages: Vec<LanguageId>,
}

impl LanguageStack {
    /// Create a stack holding only the default language.
    pub fn new(default: LanguageId) -> Self {
        Self {
            languages: vec![default],
        }
    }

    /// The current language (top of the stack).
    pub fn current(&self) -> LanguageId {
        self.languages[self.languages.len() - 1]
    }

    /// The default language (bottom of the stack).
    pub fn default_language(&self) -> LanguageId {
        self.languages[0]
    }

    pub fn depth(&self) -> usize {
        self.languages.len()
    }

    /// Make `language` current, remembering the previous one.
    pub fn push(&mut self, language: LanguageId) {
        self.languages.push(language);
    }

    /// Restore the previous language and return the one removed.
    ///
    /// # Errors
    /// `StackUnderflow` when only the default language is left.
    pub fn pop(&mut self) -> Result<LanguageId> {
        if self.languages.len() == 1 {
            return Err(BabelError::StackUnderflow);
        }
        self.languages.pop().ok_or(BabelError::StackUnderflow)
    }

    /// Replace the current language in place.
    pub fn set(&mut self, language: LanguageId) {
        let top = self.languages.len() - 1;
        self.languages[top] = language;
    }

    /// Pop until the stack is `depth` deep. Never removes the default language.
    pub fn unwind_to(&mut self, depth: usize) {
        self.languages.truncate(depth.max(1));
    }

    /// Languages from bottom (default) to top (current).
    pub fn as_slice(&self) -> &[LanguageId] {
        &self.languages
    }
}
