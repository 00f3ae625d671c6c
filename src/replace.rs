//! Simultaneous substring replacement.
//!
//! All pairs are applied in one left-to-right pass. At each position the
//! longest matching key wins, its value is emitted, and scanning resumes
//! right after the key. Emitted values are never scanned again, so a value
//! that contains another key is left as is. Empty keys are ignored; when a
//! key is given twice the last pair wins.

use std::borrow::Cow;
use std::collections::HashMap;

/// Replace every occurrence of the keys of `pairs` in `text`.
///
/// ```
/// use babel::replace::replace_pairs;
///
/// let out = replace_pairs("A and B", &[("A", "B"), ("B", "A")]);
/// assert_eq!(out, "B and A");
/// ```
pub fn replace_pairs<K, V>(text: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    replace_pairs_with(text, pairs, verbatim)
}

/// Like `replace_pairs`, but the parts of `text` that no key matched are
/// passed through `literal` first. Keys are matched against the raw text and
/// values are emitted as given.
pub fn replace_pairs_with<K, V>(
    text: &str,
    pairs: &[(K, V)],
    literal: fn(&str) -> Cow<'_, str>,
) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    // Last pair wins for duplicate keys.
    let mut lookup: HashMap<&str, &str> = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        let key = key.as_ref();
        if !key.is_empty() {
            lookup.insert(key, value.as_ref());
        }
    }
    if lookup.is_empty() {
        return literal(text).into_owned();
    }

    // Longest keys first so the longest match wins at every position.
    let mut keys: Vec<&str> = lookup.keys().copied().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut out = String::with_capacity(text.len());
    let mut run_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        match keys.iter().find(|key| rest.starts_with(**key)) {
            Some(key) => {
                out.push_str(&literal(&text[run_start..pos]));
                out.push_str(lookup[key]);
                pos += key.len();
                run_start = pos;
            }
            None => {
                // Step over the whole char; pos is always on a char boundary.
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    out.push_str(&literal(&text[run_start..]));
    out
}

fn verbatim(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}
