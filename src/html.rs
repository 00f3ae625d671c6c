//! HTML escaping and the types that track whether a string is already HTML.
//!
//! Plain text (`&str`, `String`, `FormatArg`) is escaped before it is
//! combined with markup. `Html` values are trusted markup and pass through
//! unchanged. Templates are tagged with `PlainText` or `Markup` in the same
//! way, so whether something gets escaped is decided by its type.

use crate::format::FormatArg;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Convert `&`, `<`, `>`, `"` and `'` to HTML entities.
///
/// Existing entities are escaped again: `&amp;` becomes `&amp;amp;`.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + text.len() / 2);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// A string that is valid, already escaped HTML.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// Wrap markup that is known to be safe. Nothing is escaped.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    /// Escape plain text into HTML.
    pub fn from_text(text: &str) -> Self {
        Html(escape(text).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::PlainText {}
    impl Sealed for super::Markup {}
}

/// How a template stored in the catalog should be treated.
pub trait TemplateKind: sealed::Sealed + Copy {
    /// Turn the stored template into HTML.
    fn to_html(template: &str) -> Cow<'_, str>;
}

/// The template is plain text and gets escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlainText;

/// The template is already HTML and is used as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Markup;

impl TemplateKind for PlainText {
    fn to_html(template: &str) -> Cow<'_, str> {
        escape(template)
    }
}

impl TemplateKind for Markup {
    fn to_html(template: &str) -> Cow<'_, str> {
        Cow::Borrowed(template)
    }
}

/// A value substituted into an HTML template.
///
/// Plain values are escaped after they are rendered, `Html` values pass
/// through.
pub trait HtmlArgument {
    /// The unescaped value, for formatting.
    fn format_arg(&self) -> FormatArg;

    /// True when the value is already HTML.
    fn is_markup(&self) -> bool {
        false
    }

    /// The value as HTML, escaped if needed.
    fn to_html_str(&self) -> Cow<'_, str>;
}

impl HtmlArgument for Html {
    fn format_arg(&self) -> FormatArg {
        FormatArg::Str(self.0.clone())
    }

    fn is_markup(&self) -> bool {
        true
    }

    fn to_html_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl HtmlArgument for FormatArg {
    fn format_arg(&self) -> FormatArg {
        self.clone()
    }

    fn to_html_str(&self) -> Cow<'_, str> {
        match self {
            FormatArg::Str(s) => escape(s),
            other => Cow::Owned(escape(&other.to_string()).into_owned()),
        }
    }
}

impl HtmlArgument for &str {
    fn format_arg(&self) -> FormatArg {
        FormatArg::from(*self)
    }

    fn to_html_str(&self) -> Cow<'_, str> {
        escape(self)
    }
}

impl HtmlArgument for String {
    fn format_arg(&self) -> FormatArg {
        FormatArg::Str(self.clone())
    }

    fn to_html_str(&self) -> Cow<'_, str> {
        escape(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Escape Tests ====================

    #[test]
    fn test_escape_all_special_chars() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_plain_text_borrows() {
        assert!(matches!(escape("nothing special"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_is_not_idempotent_on_entities() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape("日本 <b>"), "日本 &lt;b&gt;");
    }

    // ==================== Html Tests ====================

    #[test]
    fn test_html_from_trusted_passes_through() {
        let html = Html::from_trusted("<b>bold</b>");
        assert_eq!(html.as_str(), "<b>bold</b>");
        assert_eq!(html.to_string(), "<b>bold</b>");
    }

    #[test]
    fn test_html_from_text_escapes() {
        assert_eq!(Html::from_text("1 < 2").into_string(), "1 &lt; 2");
    }

    // ==================== Template Kind Tests ====================

    #[test]
    fn test_template_kinds() {
        assert_eq!(PlainText::to_html("a<b"), "a&lt;b");
        assert_eq!(Markup::to_html("a<b"), "a<b");
    }

    // ==================== Argument Tests ====================

    #[test]
    fn test_plain_arguments_are_escaped() {
        assert_eq!("<i>".to_html_str(), "&lt;i&gt;");
        assert_eq!("<i>".to_string().to_html_str(), "&lt;i&gt;");
        assert_eq!(FormatArg::from("a&b").to_html_str(), "a&amp;b");
        assert!(!"<i>".is_markup());
    }

    #[test]
    fn test_plain_arguments_format_unescaped() {
        assert_eq!("<i>".format_arg(), FormatArg::Str("<i>".to_string()));
        assert_eq!(FormatArg::Int(60).format_arg(), FormatArg::Int(60));
    }

    #[test]
    fn test_numeric_arguments_as_html() {
        assert_eq!(FormatArg::Float(1.5).to_html_str(), "1.5");
        assert!(!FormatArg::Int(5).is_markup());
    }

    #[test]
    fn test_html_arguments_pass_through() {
        let markup = Html::from_trusted("<em>x</em>");
        assert!(markup.is_markup());
        assert_eq!(markup.to_html_str(), "<em>x</em>");
        assert_eq!(markup.format_arg(), FormatArg::Str("<em>x</em>".to_string()));
    }
}
