//! The translation provider.
//!
//! `Translator` is the contract: lookups of texts and words in the current
//! language, formatted, replaced and HTML variants of them, the language
//! stack and date rendering. Only the lookups and the stack operations are
//! required; everything else is provided on top of them.
//!
//! `Babel` implements the contract over any `Catalog`.

use crate::date::{self, DateStyle};
use crate::error::{BabelError, Result};
use crate::format::{self, FormatArg};
use crate::html::{escape, Html, HtmlArgument, TemplateKind};
use crate::i18n::{
    Catalog, Direction, Language, LanguageId, LanguageStack, LookupMetrics, TextId, WordId,
};
use crate::replace::{replace_pairs, replace_pairs_with};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

/// Retrieval of localized texts, words and dates.
pub trait Translator {
    /// The language on top of the language stack.
    fn current_language(&self) -> &Language;

    /// A word in the current language.
    fn word(&self, id: WordId) -> Result<String>;

    /// A text in the current language.
    fn text(&self, id: TextId) -> Result<String>;

    /// Make `language` current, remembering the previous language.
    fn push_language(&mut self, language: LanguageId) -> Result<()>;

    /// Restore the previous language. Returns the language that was removed.
    ///
    /// # Errors
    /// `StackUnderflow` when only the default language is left.
    fn pop_language(&mut self) -> Result<LanguageId>;

    /// Replace the current language without growing the stack.
    fn set_language(&mut self, language: LanguageId) -> Result<()>;

    /// ID of the current language.
    fn lan_id(&self) -> LanguageId {
        self.current_language().id
    }

    /// Internal code of the current language.
    fn code(&self) -> &str {
        &self.current_language().code
    }

    /// ISO 639-1 code of the current language.
    fn lang(&self) -> &str {
        &self.current_language().iso
    }

    /// Display direction of the current language.
    fn dir(&self) -> Direction {
        self.current_language().direction
    }

    /// A text with its printf placeholders substituted by `args`, in order.
    fn text_formatted(&self, id: TextId, args: &[FormatArg]) -> Result<String> {
        format::sprintf(&self.text(id)?, args)
    }

    /// A text with all `pairs` replaced in one pass.
    fn text_replaced<K, V>(&self, id: TextId, pairs: &[(K, V)]) -> Result<String>
    where
        Self: Sized,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Ok(replace_pairs(&self.text(id)?, pairs))
    }

    /// A word with special characters converted to HTML entities.
    fn html_word(&self, id: WordId) -> Result<Html> {
        Ok(Html::from_text(&self.word(id)?))
    }

    /// A text with special characters converted to HTML entities.
    fn html_text(&self, id: TextId) -> Result<Html> {
        Ok(Html::from_text(&self.text(id)?))
    }

    /// A formatted text as HTML.
    ///
    /// `_kind` tells whether the stored text is plain text (`PlainText`, its
    /// literal parts and padding characters get escaped) or markup (`Markup`,
    /// used as is). Plain arguments are escaped after width and precision are
    /// applied, so both count the characters of the text itself. `Html`
    /// arguments are not escaped.
    ///
    /// # Example
    /// ```
    /// use babel::html::{Html, PlainText};
    /// use babel::i18n::{LanguageRegistry, MemoryCatalog, TextId};
    /// use babel::{Babel, Translator};
    /// use std::sync::Arc;
    ///
    /// let registry = LanguageRegistry::builtin();
    /// let en = registry.get_by_code("en").unwrap().id;
    /// let catalog = MemoryCatalog::new(registry)
    ///     .with_text(en, TextId::new(1), "Tom & %s")
    ///     .unwrap();
    /// let babel = Babel::new(Arc::new(catalog), en).unwrap();
    ///
    /// let out = babel
    ///     .html_text_formatted(TextId::new(1), PlainText, &[Html::from_trusted("<b>Jerry</b>")])
    ///     .unwrap();
    /// assert_eq!(out.as_str(), "Tom &amp; <b>Jerry</b>");
    /// ```
    fn html_text_formatted<K, A>(&self, id: TextId, _kind: K, args: &[A]) -> Result<Html>
    where
        Self: Sized,
        K: TemplateKind,
        A: HtmlArgument,
    {
        let template = self.text(id)?;
        let values: Vec<FormatArg> = args.iter().map(HtmlArgument::format_arg).collect();
        let html = format::sprintf_with(&template, &values, K::to_html, |index, rendered| {
            if args.get(index).is_some_and(HtmlArgument::is_markup) {
                rendered
            } else {
                escape(&rendered).into_owned()
            }
        })?;
        Ok(Html::from_trusted(html))
    }

    /// A text with `pairs` replaced, as HTML.
    ///
    /// Keys are matched against the stored text before anything is escaped.
    /// With `PlainText` the unreplaced parts are escaped afterwards; values
    /// are escaped unless they are `Html`.
    fn html_text_replaced<K, Key, V>(&self, id: TextId, _kind: K, pairs: &[(Key, V)]) -> Result<Html>
    where
        Self: Sized,
        K: TemplateKind,
        Key: AsRef<str>,
        V: HtmlArgument,
    {
        let text = self.text(id)?;
        let pairs: Vec<_> = pairs
            .iter()
            .map(|(key, value)| (key.as_ref(), value.to_html_str()))
            .collect();
        Ok(Html::from_trusted(replace_pairs_with(
            &text,
            &pairs,
            K::to_html,
        )))
    }

    /// `date` (or today when `None`) rendered for the current language.
    fn formatted_date(&self, style: DateStyle, date: Option<NaiveDate>) -> Result<String> {
        let date = date.unwrap_or_else(date::today);
        date::format_date(self.current_language(), style, date)
    }
}

/// Behaviour switches for `Babel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BabelOptions {
    /// Look an entry up in the default language when the current language
    /// does not have it.
    pub fallback_to_default: bool,
}

/// Translation provider over a shared catalog.
///
/// Each instance owns its language stack. Use `fork` to get an independent
/// provider (e.g., one per request) over the same catalog.
#[derive(Debug)]
pub struct Babel<C> {
    catalog: Arc<C>,
    stack: LanguageStack,
    options: BabelOptions,
    metrics: Arc<LookupMetrics>,
}

impl<C: Catalog> Babel<C> {
    /// Create a provider whose default language is `default`.
    ///
    /// # Errors
    /// `UnknownLanguage` if the catalog does not know `default`.
    pub fn new(catalog: Arc<C>, default: LanguageId) -> Result<Self> {
        if catalog.language(default).is_none() {
            return Err(BabelError::UnknownLanguage(default));
        }
        Ok(Self {
            catalog,
            stack: LanguageStack::new(default),
            options: BabelOptions::default(),
            metrics: Arc::new(LookupMetrics::new()),
        })
    }

    /// Create a provider whose default language has the code `code`.
    pub fn with_default_code(catalog: Arc<C>, code: &str) -> Result<Self> {
        let default = catalog
            .language_by_code(code)
            .map(|lang| lang.id)
            .ok_or_else(|| BabelError::UnknownLanguageCode(code.to_string()))?;
        Self::new(catalog, default)
    }

    pub fn with_options(mut self, options: BabelOptions) -> Self {
        self.options = options;
        self
    }

    /// A new provider sharing this one's catalog, options and metrics, with
    /// a stack holding only the default language.
    pub fn fork(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            stack: LanguageStack::new(self.stack.default_language()),
            options: self.options,
            metrics: Arc::clone(&self.metrics),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn options(&self) -> BabelOptions {
        self.options
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    /// The default language (bottom of the stack).
    pub fn default_language(&self) -> LanguageId {
        self.stack.default_language()
    }

    /// Number of languages on the stack, the default included.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Look a language up by code.
    pub fn language_by_code(&self, code: &str) -> Result<&Language> {
        self.catalog
            .language_by_code(code)
            .ok_or_else(|| BabelError::UnknownLanguageCode(code.to_string()))
    }

    /// A text in an explicitly chosen language.
    pub fn text_in(&self, language: LanguageId, id: TextId) -> Result<String> {
        self.ensure_language(language)?;
        self.lookup_text(language, id)
    }

    /// A word in an explicitly chosen language.
    pub fn word_in(&self, language: LanguageId, id: WordId) -> Result<String> {
        self.ensure_language(language)?;
        self.lookup_word(language, id)
    }

    /// Run `f` with `language` pushed, then restore the stack to its
    /// previous depth, whether `f` succeeded or not.
    pub fn with_language<T>(
        &mut self,
        language: LanguageId,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let depth = self.stack.depth();
        self.push_language(language)?;
        let result = f(self);
        self.stack.unwind_to(depth);
        debug!("Restored language {} (depth {})", self.stack.current(), depth);
        result
    }

    fn ensure_language(&self, language: LanguageId) -> Result<()> {
        if self.catalog.language(language).is_some() {
            Ok(())
        } else {
            Err(BabelError::UnknownLanguage(language))
        }
    }

    fn lookup_text(&self, language: LanguageId, id: TextId) -> Result<String> {
        self.metrics.record_text_lookup();
        if let Some(text) = self.catalog.text(language, id) {
            return Ok(text.to_string());
        }

        let default = self.stack.default_language();
        if self.options.fallback_to_default && language != default {
            if let Some(text) = self.catalog.text(default, id) {
                self.metrics.record_fallback();
                warn!(
                    "Text {} missing in language {}, falling back to language {}",
                    id, language, default
                );
                return Ok(text.to_string());
            }
        }

        self.metrics.record_miss();
        warn!("Text {} not found in language {}", id, language);
        Err(BabelError::UnknownText { language, id })
    }

    fn lookup_word(&self, language: LanguageId, id: WordId) -> Result<String> {
        self.metrics.record_word_lookup();
        if let Some(word) = self.catalog.word(language, id) {
            return Ok(word.to_string());
        }

        let default = self.stack.default_language();
        if self.options.fallback_to_default && language != default {
            if let Some(word) = self.catalog.word(default, id) {
                self.metrics.record_fallback();
                warn!(
                    "Word {} missing in language {}, falling back to language {}",
                    id, language, default
                );
                return Ok(word.to_string());
            }
        }

        self.metrics.record_miss();
        warn!("Word {} not found in language {}", id, language);
        Err(BabelError::UnknownWord { language, id })
    }
}

impl<C: Catalog> Translator for Babel<C> {
    /// # Panics
    /// Panics if the catalog lost a language that is on the stack. This
    /// cannot happen: push and set validate ids and catalogs are immutable
    /// behind the `Arc`.
    fn current_language(&self) -> &Language {
        self.catalog
            .language(self.stack.current())
            .expect("languages on the stack are validated on push and set")
    }

    fn word(&self, id: WordId) -> Result<String> {
        self.lookup_word(self.stack.current(), id)
    }

    fn text(&self, id: TextId) -> Result<String> {
        self.lookup_text(self.stack.current(), id)
    }

    fn push_language(&mut self, language: LanguageId) -> Result<()> {
        self.ensure_language(language)?;
        self.stack.push(language);
        debug!("Pushed language {} (depth {})", language, self.stack.depth());
        Ok(())
    }

    fn pop_language(&mut self) -> Result<LanguageId> {
        let popped = self.stack.pop()?;
        debug!(
            "Popped language {}, current language is {} (depth {})",
            popped,
            self.stack.current(),
            self.stack.depth()
        );
        Ok(popped)
    }

    fn set_language(&mut self, language: LanguageId) -> Result<()> {
        self.ensure_language(language)?;
        self.stack.set(language);
        debug!("Set language {} (depth {})", language, self.stack.depth());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{Markup, PlainText};
    use crate::i18n::{LanguageRegistry, MemoryCatalog};
    use crate::text_args;

    const EN: LanguageId = LanguageId::new(1);
    const NL: LanguageId = LanguageId::new(2);
    const AR: LanguageId = LanguageId::new(4);

    const TXT_GREETING: TextId = TextId::new(1);
    const TXT_PAIR: TextId = TextId::new(2);
    const TXT_MARKUP: TextId = TextId::new(3);
    const TXT_QUOTE: TextId = TextId::new(4);
    const TXT_ENGLISH_ONLY: TextId = TextId::new(5);
    const TXT_CHAR: TextId = TextId::new(6);
    const TXT_WIDTHS: TextId = TextId::new(7);
    const TXT_CUSTOM_PAD: TextId = TextId::new(8);
    const TXT_AMPERSAND: TextId = TextId::new(9);
    const WRD_YES: WordId = WordId::new(1);

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new(LanguageRegistry::builtin())
            .with_text(EN, TXT_GREETING, "Hello %s, you have %d new messages")
            .unwrap()
            .with_text(NL, TXT_GREETING, "Hallo %s, je hebt %d nieuwe berichten")
            .unwrap()
            .with_text(EN, TXT_PAIR, "A and B")
            .unwrap()
            .with_text(EN, TXT_MARKUP, "<b>%s</b> & co")
            .unwrap()
            .with_text(EN, TXT_QUOTE, "Say \"@WORD@\" <now>")
            .unwrap()
            .with_text(EN, TXT_ENGLISH_ONLY, "Only in English")
            .unwrap()
            .with_text(EN, TXT_CHAR, "x%cy")
            .unwrap()
            .with_text(EN, TXT_WIDTHS, "[%-3s] [%.1s]")
            .unwrap()
            .with_text(EN, TXT_CUSTOM_PAD, "%'<4s")
            .unwrap()
            .with_text(EN, TXT_AMPERSAND, "Tom & Jerry")
            .unwrap()
            .with_word(EN, WRD_YES, "Yes")
            .unwrap()
            .with_word(NL, WRD_YES, "Ja")
            .unwrap()
            .with_word(AR, WRD_YES, "نعم")
            .unwrap()
    }

    fn babel() -> Babel<MemoryCatalog> {
        Babel::new(Arc::new(catalog()), EN).unwrap()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_unknown_default() {
        let result = Babel::new(Arc::new(catalog()), LanguageId::new(99));
        assert!(matches!(result, Err(BabelError::UnknownLanguage(_))));
    }

    #[test]
    fn test_with_default_code() {
        let babel = Babel::with_default_code(Arc::new(catalog()), "nl").unwrap();
        assert_eq!(babel.lan_id(), NL);
        assert!(Babel::with_default_code(Arc::new(catalog()), "zz").is_err());
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_word_and_text_in_current_language() {
        let mut babel = babel();
        assert_eq!(babel.word(WRD_YES).unwrap(), "Yes");
        babel.push_language(NL).unwrap();
        assert_eq!(babel.word(WRD_YES).unwrap(), "Ja");
        assert!(babel.text(TXT_GREETING).unwrap().starts_with("Hallo"));
    }

    #[test]
    fn test_unknown_ids() {
        let babel = babel();
        assert!(matches!(
            babel.word(WordId::new(404)),
            Err(BabelError::UnknownWord { .. })
        ));
        assert!(matches!(
            babel.text(TextId::new(404)),
            Err(BabelError::UnknownText { .. })
        ));
    }

    #[test]
    fn test_missing_translation_without_fallback() {
        let mut babel = babel();
        babel.push_language(NL).unwrap();
        let err = babel.text(TXT_ENGLISH_ONLY).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_translation_with_fallback() {
        let mut babel = babel().with_options(BabelOptions {
            fallback_to_default: true,
        });
        babel.push_language(NL).unwrap();
        assert_eq!(babel.text(TXT_ENGLISH_ONLY).unwrap(), "Only in English");
        assert_eq!(babel.metrics().fallbacks(), 1);
    }

    #[test]
    fn test_explicit_language_lookups() {
        let babel = babel();
        assert_eq!(babel.word_in(AR, WRD_YES).unwrap(), "نعم");
        assert!(babel.text_in(NL, TXT_GREETING).unwrap().contains("berichten"));
        assert!(matches!(
            babel.word_in(LanguageId::new(99), WRD_YES),
            Err(BabelError::UnknownLanguage(_))
        ));
        assert_eq!(babel.lan_id(), EN);
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_text_formatted() {
        let babel = babel();
        let out = babel
            .text_formatted(TXT_GREETING, &text_args!["Ada", 3])
            .unwrap();
        assert_eq!(out, "Hello Ada, you have 3 new messages");
    }

    #[test]
    fn test_text_formatted_too_few_args() {
        let babel = babel();
        let result = babel.text_formatted(TXT_GREETING, &text_args!["Ada"]);
        assert!(matches!(result, Err(BabelError::ArgumentCount { .. })));
    }

    #[test]
    fn test_text_replaced_simultaneous() {
        let babel = babel();
        let out = babel
            .text_replaced(TXT_PAIR, &[("A", "B"), ("B", "A")])
            .unwrap();
        assert_eq!(out, "B and A");
    }

    // ==================== HTML Tests ====================

    #[test]
    fn test_html_text_equals_escaped_text() {
        let babel = babel();
        let plain = babel.text(TXT_QUOTE).unwrap();
        let html = babel.html_text(TXT_QUOTE).unwrap();
        assert_eq!(html.as_str(), crate::html::escape(&plain));
        assert_eq!(html.as_str(), "Say &quot;@WORD@&quot; &lt;now&gt;");
    }

    #[test]
    fn test_html_word() {
        let mut babel = babel();
        babel.set_language(AR).unwrap();
        assert_eq!(babel.html_word(WRD_YES).unwrap().as_str(), "نعم");
    }

    #[test]
    fn test_html_formatted_markup_template_plain_args() {
        let babel = babel();
        let out = babel
            .html_text_formatted(TXT_MARKUP, Markup, &text_args!["<script>"])
            .unwrap();
        assert_eq!(out.as_str(), "<b>&lt;script&gt;</b> & co");
    }

    #[test]
    fn test_html_formatted_plain_template_html_args() {
        let babel = babel();
        let out = babel
            .html_text_formatted(TXT_MARKUP, PlainText, &[Html::from_trusted("<i>x</i>")])
            .unwrap();
        assert_eq!(out.as_str(), "&lt;b&gt;<i>x</i>&lt;/b&gt; &amp; co");
    }

    #[test]
    fn test_html_formatted_numbers() {
        let babel = babel();
        let out = babel
            .html_text_formatted(TXT_GREETING, PlainText, &text_args!["O'Neil", 2])
            .unwrap();
        assert_eq!(out.as_str(), "Hello O&#039;Neil, you have 2 new messages");
    }

    #[test]
    fn test_html_replaced_plain_template() {
        let babel = babel();
        let out = babel
            .html_text_replaced(TXT_QUOTE, PlainText, &[("@WORD@", "cheese & wine")])
            .unwrap();
        assert_eq!(out.as_str(), "Say &quot;cheese &amp; wine&quot; &lt;now&gt;");
    }

    #[test]
    fn test_html_replaced_trusted_values() {
        let babel = babel();
        let out = babel
            .html_text_replaced(
                TXT_QUOTE,
                Markup,
                &[("@WORD@", Html::from_trusted("<em>hi</em>"))],
            )
            .unwrap();
        assert_eq!(out.as_str(), "Say \"<em>hi</em>\" <now>");
    }

    #[test]
    fn test_html_formatted_char_from_number_is_escaped() {
        let babel = babel();
        let out = babel
            .html_text_formatted(TXT_CHAR, PlainText, &[FormatArg::Int(60)])
            .unwrap();
        assert_eq!(out.as_str(), "x&lt;y");
    }

    #[test]
    fn test_html_formatted_width_counts_unescaped_chars() {
        let babel = babel();
        let out = babel
            .html_text_formatted(TXT_WIDTHS, PlainText, &["<", "<b"])
            .unwrap();
        assert_eq!(out.as_str(), "[&lt;  ] [&lt;]");
    }

    #[test]
    fn test_html_formatted_custom_pad_is_escaped() {
        let babel = babel();
        let out = babel
            .html_text_formatted(TXT_CUSTOM_PAD, PlainText, &["a"])
            .unwrap();
        assert_eq!(out.as_str(), "&lt;&lt;&lt;a");

        let trusted = babel
            .html_text_formatted(TXT_CUSTOM_PAD, PlainText, &[Html::from_trusted("<i>")])
            .unwrap();
        assert_eq!(trusted.as_str(), "&lt;<i>");
    }

    #[test]
    fn test_html_replaced_keys_do_not_match_entities() {
        let babel = babel();
        let pairs = [("amp", "X")];
        let plain = babel.text_replaced(TXT_AMPERSAND, &pairs).unwrap();
        let html = babel
            .html_text_replaced(TXT_AMPERSAND, PlainText, &pairs)
            .unwrap();
        assert_eq!(plain, "Tom & Jerry");
        assert_eq!(html.as_str(), "Tom &amp; Jerry");
    }

    #[test]
    fn test_html_replaced_equals_escaped_plain_replacement() {
        let babel = babel();
        let pairs = [("@WORD@", "a<b & 'c'"), ("now", "then")];
        let plain = babel.text_replaced(TXT_QUOTE, &pairs).unwrap();
        let html = babel.html_text_replaced(TXT_QUOTE, PlainText, &pairs).unwrap();
        assert_eq!(html.as_str(), crate::html::escape(&plain));
    }

    // ==================== Language Stack Tests ====================

    #[test]
    fn test_push_pop_restores() {
        let mut babel = babel();
        babel.push_language(NL).unwrap();
        assert_eq!(babel.code(), "nl");
        assert_eq!(babel.pop_language().unwrap(), NL);
        assert_eq!(babel.code(), "en");
    }

    #[test]
    fn test_pop_default_fails() {
        let mut babel = babel();
        assert!(matches!(babel.pop_language(), Err(BabelError::StackUnderflow)));
        assert_eq!(babel.lan_id(), EN);
    }

    #[test]
    fn test_set_keeps_depth() {
        let mut babel = babel();
        babel.push_language(NL).unwrap();
        babel.set_language(AR).unwrap();
        assert_eq!(babel.depth(), 2);
        assert_eq!(babel.lan_id(), AR);
        assert_eq!(babel.dir(), Direction::Rtl);
        assert_eq!(babel.lang(), "ar");
    }

    #[test]
    fn test_push_unknown_language_leaves_stack() {
        let mut babel = babel();
        assert!(babel.push_language(LanguageId::new(99)).is_err());
        assert!(babel.set_language(LanguageId::new(99)).is_err());
        assert_eq!(babel.depth(), 1);
        assert_eq!(babel.lan_id(), EN);
    }

    #[test]
    fn test_with_language_restores_on_error() {
        let mut babel = babel();
        let result: Result<String> = babel.with_language(NL, |b| {
            b.push_language(AR)?;
            b.text(TXT_ENGLISH_ONLY)
        });
        assert!(result.is_err());
        assert_eq!(babel.depth(), 1);
        assert_eq!(babel.lan_id(), EN);
    }

    #[test]
    fn test_with_language_returns_value() {
        let mut babel = babel();
        let yes = babel.with_language(NL, |b| b.word(WRD_YES)).unwrap();
        assert_eq!(yes, "Ja");
        assert_eq!(babel.word(WRD_YES).unwrap(), "Yes");
    }

    #[test]
    fn test_fork_has_fresh_stack_and_shared_metrics() {
        let mut babel = babel();
        babel.push_language(NL).unwrap();
        let fork = babel.fork();
        assert_eq!(fork.depth(), 1);
        assert_eq!(fork.lan_id(), EN);

        fork.word(WRD_YES).unwrap();
        assert_eq!(babel.metrics().word_lookups(), 1);
    }

    // ==================== Date Tests ====================

    #[test]
    fn test_formatted_date_uses_current_language() {
        let mut babel = babel();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(
            babel.formatted_date(DateStyle::Long, date).unwrap(),
            "15 March 2024"
        );
        babel.push_language(NL).unwrap();
        assert_eq!(
            babel.formatted_date(DateStyle::Long, date).unwrap(),
            "15 maart 2024"
        );
    }

    #[test]
    fn test_formatted_date_defaults_to_today() {
        let babel = babel();
        let today = babel.formatted_date(DateStyle::Short, None).unwrap();
        let explicit = babel
            .formatted_date(DateStyle::Short, Some(date::today()))
            .unwrap();
        assert_eq!(today, explicit);
    }
}
