//! Catalog validation.
//!
//! Checks that every translation of a text keeps the placeholders and
//! markers of the reference language, and reports entries that were never
//! translated.

use crate::format::required_args;
use crate::i18n::{Catalog, LanguageId, MemoryCatalog};
use regex::Regex;
use std::sync::OnceLock;

/// Errors and warnings found in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make formatting fail or misbehave
    pub errors: Vec<String>,

    /// Problems that only affect output quality
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validator for catalog consistency.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Compare every language of `catalog` against `reference`.
    ///
    /// Errors:
    /// - a text in any language that is not a valid format template
    /// - a translation whose printf placeholders differ from the reference
    ///
    /// Warnings:
    /// - a translation whose `@NAME@` / `{name}` markers differ
    /// - a text or word missing in a language
    pub fn validate(catalog: &MemoryCatalog, reference: LanguageId) -> ValidationReport {
        let mut report = ValidationReport::default();

        let Some(reference_language) = catalog.language(reference) else {
            report
                .errors
                .push(format!("Reference language {} is not in the catalog", reference));
            return report;
        };

        for language in catalog.registry().list_all() {
            for (id, text) in catalog.texts_for(language.id) {
                if required_args(text).is_none() {
                    report.errors.push(format!(
                        "Text {} in '{}' is not a valid format template",
                        id, language.code
                    ));
                }
            }
        }

        let others: Vec<_> = catalog
            .registry()
            .list_all()
            .into_iter()
            .filter(|lang| lang.id != reference)
            .collect();

        for (id, reference_text) in catalog.texts_for(reference) {
            let orig_placeholders = Self::extract_placeholders(reference_text);
            let orig_markers = Self::extract_markers(reference_text);

            for language in &others {
                let Some(translated) = catalog.text(language.id, id) else {
                    report
                        .warnings
                        .push(format!("Text {} missing in '{}'", id, language.code));
                    continue;
                };

                let trans_placeholders = Self::extract_placeholders(translated);
                if orig_placeholders != trans_placeholders {
                    report.errors.push(format!(
                        "Text {} placeholder mismatch: '{}' has {:?}, '{}' has {:?}",
                        id,
                        reference_language.code,
                        orig_placeholders,
                        language.code,
                        trans_placeholders
                    ));
                }

                let trans_markers = Self::extract_markers(translated);
                if orig_markers != trans_markers {
                    report.warnings.push(format!(
                        "Text {} marker mismatch: '{}' has {:?}, '{}' has {:?}",
                        id, reference_language.code, orig_markers, language.code, trans_markers
                    ));
                }
            }
        }

        for (id, _) in catalog.words_for(reference) {
            for language in &others {
                if catalog.word(language.id, id).is_none() {
                    report
                        .warnings
                        .push(format!("Word {} missing in '{}'", id, language.code));
                }
            }
        }

        report
    }

    /// Extract printf placeholders, sorted, ignoring `%%`.
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"%(?:\d+\$)?[-+ 0]*(?:'.)?\d*(?:\.\d+)?[bcdeEfFosuxX%]")
                .expect("placeholder regex is valid")
        });

        let mut placeholders: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .filter(|p| p != "%%")
            .collect();
        placeholders.sort();
        placeholders
    }

    /// Extract `@NAME@` and `{name}` replacement markers, sorted.
    fn extract_markers(text: &str) -> Vec<String> {
        let regex = MARKER_REGEX.get_or_init(|| {
            Regex::new(r"@[A-Za-z0-9_]+@|\{[A-Za-z0-9_]+\}").expect("marker regex is valid")
        });

        let mut markers: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        markers.sort();
        markers
    }
}
