//! Language type: identity, codes, writing direction and date patterns.
//!
//! A `Language` is plain data. Which languages exist is decided by the
//! `LanguageRegistry` held by a catalog.

use crate::date::DateStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque numeric identifier of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(u32);

impl LanguageId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display direction of a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// The value used for the HTML `dir` attribute: `"ltr"` or `"rtl"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// strftime patterns used for each `DateStyle`.
///
/// Patterns are rendered with the language's locale, so `%A`, `%B` and `%x`
/// come out in that language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePatterns {
    pub full: String,
    pub long: String,
    pub medium: String,
    pub short: String,
}

impl DatePatterns {
    pub fn pattern(&self, style: DateStyle) -> &str {
        match style {
            DateStyle::Full => &self.full,
            DateStyle::Long => &self.long,
            DateStyle::Medium => &self.medium,
            DateStyle::Short => &self.short,
        }
    }
}

impl Default for DatePatterns {
    fn default() -> Self {
        Self {
            full: "%A %-d %B %Y".to_string(),
            long: "%-d %B %Y".to_string(),
            medium: "%-d %b %Y".to_string(),
            short: "%x".to_string(),
        }
    }
}

/// A language known to a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Numeric identifier
    pub id: LanguageId,

    /// Internal machine code (e.g., "en", "nl-be")
    pub code: String,

    /// ISO 639-1 language code (e.g., "en", "nl")
    pub iso: String,

    /// English name of the language (e.g., "Dutch")
    pub name: String,

    /// Native name of the language (e.g., "Nederlands")
    #[serde(default)]
    pub native_name: String,

    #[serde(default)]
    pub direction: Direction,

    /// POSIX locale used for date rendering (e.g., "nl_NL")
    pub locale: String,

    #[serde(default)]
    pub date_patterns: DatePatterns,
}

impl Language {
    /// Create a left-to-right language with default date patterns.
    ///
    /// # Example
    /// ```
    /// use babel::i18n::{Language, LanguageId};
    ///
    /// let dutch = Language::new(LanguageId::new(2), "nl", "Dutch", "nl_NL")
    ///     .with_native_name("Nederlands");
    /// assert_eq!(dutch.iso, "nl");
    /// ```
    pub fn new(id: LanguageId, code: &str, name: &str, locale: &str) -> Self {
        let iso = code.split(['-', '_']).next().unwrap_or(code).to_string();
        Self {
            id,
            code: code.to_string(),
            iso,
            name: name.to_string(),
            native_name: name.to_string(),
            direction: Direction::Ltr,
            locale: locale.to_string(),
            date_patterns: DatePatterns::default(),
        }
    }

    pub fn with_native_name(mut self, native_name: &str) -> Self {
        self.native_name = native_name.to_string();
        self
    }

    pub fn with_iso(mut self, iso: &str) -> Self {
        self.iso = iso.to_string();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_date_patterns(mut self, date_patterns: DatePatterns) -> Self {
        self.date_patterns = date_patterns;
        self
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == Direction::Rtl
    }
}
