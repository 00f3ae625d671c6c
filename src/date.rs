//! Locale-aware date rendering in four styles.

use crate::error::{BabelError, Result};
use crate::i18n::Language;
use chrono::format::{Item, StrftimeItems};
use chrono::{Locale, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Numeric value of `DateStyle::Full`.
pub const FORMAT_FULL: i32 = 1;
/// Numeric value of `DateStyle::Long`.
pub const FORMAT_LONG: i32 = 2;
/// Numeric value of `DateStyle::Medium`.
pub const FORMAT_MEDIUM: i32 = 3;
/// Numeric value of `DateStyle::Short`.
pub const FORMAT_SHORT: i32 = 4;

/// How much of a date is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// Weekday, day, month name and year (e.g., "Friday 15 March 2024")
    Full,
    /// Day, month name and year
    Long,
    /// Day, abbreviated month name and year
    Medium,
    /// The locale's numeric date (e.g., "03/15/2024")
    Short,
}

impl DateStyle {
    pub const fn code(self) -> i32 {
        match self {
            DateStyle::Full => FORMAT_FULL,
            DateStyle::Long => FORMAT_LONG,
            DateStyle::Medium => FORMAT_MEDIUM,
            DateStyle::Short => FORMAT_SHORT,
        }
    }
}

impl TryFrom<i32> for DateStyle {
    type Error = BabelError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            FORMAT_FULL => Ok(DateStyle::Full),
            FORMAT_LONG => Ok(DateStyle::Long),
            FORMAT_MEDIUM => Ok(DateStyle::Medium),
            FORMAT_SHORT => Ok(DateStyle::Short),
            other => Err(BabelError::InvalidDateStyle(other)),
        }
    }
}

impl std::str::FromStr for DateStyle {
    type Err = BabelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(DateStyle::Full),
            "long" => Ok(DateStyle::Long),
            "medium" => Ok(DateStyle::Medium),
            "short" => Ok(DateStyle::Short),
            other => other
                .parse::<i32>()
                .map_err(|_| BabelError::UnknownDateStyle(s.to_string()))
                .and_then(DateStyle::try_from),
        }
    }
}

/// Look up chrono's locale data by POSIX name (e.g., "nl_NL").
pub fn resolve_locale(name: &str) -> Result<Locale> {
    Locale::try_from(name).map_err(|_| BabelError::UnknownLocale(name.to_string()))
}

/// Render `date` in `language` using the pattern for `style`.
///
/// # Errors
/// `UnknownLocale` if the language's locale has no data,
/// `InvalidDatePattern` if the pattern cannot be rendered.
pub fn format_date(language: &Language, style: DateStyle, date: NaiveDate) -> Result<String> {
    let locale = resolve_locale(&language.locale)?;
    let pattern = language.date_patterns.pattern(style);
    let invalid = || BabelError::InvalidDatePattern(pattern.to_string());

    if StrftimeItems::new_with_locale(pattern, locale).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
    let datetime = Utc.from_utc_datetime(&midnight);

    let mut out = String::new();
    write!(out, "{}", datetime.format_localized(pattern, locale)).map_err(|_| invalid())?;
    Ok(out)
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
