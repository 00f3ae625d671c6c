//! Multilingual text retrieval.
//!
//! A `Babel` provider looks texts and words up in a `Catalog` for the
//! current language of its language stack, and offers printf-style
//! formatting, one-pass replacement, HTML escaping and localized dates on
//! top of those lookups.

pub mod babel;
pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod html;
pub mod i18n;
pub mod replace;

pub use babel::{Babel, BabelOptions, Translator};
pub use date::{DateStyle, FORMAT_FULL, FORMAT_LONG, FORMAT_MEDIUM, FORMAT_SHORT};
pub use error::{BabelError, Result};
pub use format::FormatArg;
pub use html::{Html, HtmlArgument, Markup, PlainText};
