use crate::babel::{Babel, BabelOptions};
use crate::i18n::MemoryCatalog;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    // Catalog
    pub catalog_file: PathBuf,

    // Language stack
    pub default_language: String,
    pub fallback_to_default: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            catalog_file: std::env::var("BABEL_CATALOG_FILE")
                .unwrap_or_else(|_| "data/catalog.json".to_string())
                .into(),

            default_language: std::env::var("BABEL_DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            fallback_to_default: match std::env::var("BABEL_FALLBACK_TO_DEFAULT") {
                Ok(value) => parse_bool(&value)
                    .with_context(|| format!("BABEL_FALLBACK_TO_DEFAULT is not a boolean: {value}"))?,
                Err(_) => false,
            },
        })
    }

    /// Load the catalog file and build a provider whose default language is
    /// `default_language`.
    pub fn build_babel(&self) -> Result<Babel<MemoryCatalog>> {
        let catalog = MemoryCatalog::from_json_file(&self.catalog_file)
            .with_context(|| format!("Failed to load catalog {}", self.catalog_file.display()))?;

        info!(
            "Loaded catalog {} ({} texts, {} words)",
            self.catalog_file.display(),
            catalog.text_count(),
            catalog.word_count()
        );

        let babel = Babel::with_default_code(Arc::new(catalog), &self.default_language)
            .with_context(|| format!("Invalid BABEL_DEFAULT_LANGUAGE: {}", self.default_language))?
            .with_options(BabelOptions {
                fallback_to_default: self.fallback_to_default,
            });
        Ok(babel)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
