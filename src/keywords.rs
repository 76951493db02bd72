//! Keyword tokenization for free text.

use std::collections::BTreeSet;

use crate::patterns::{KEYWORD_DELIMITERS, STOP_WORDS};

/// Splits `text` into a deduplicated set of lowercase candidate keywords.
///
/// The text is lowercased and split on runs of whitespace and `,;.()[]{}`.
/// A token survives when it is not a stop word and is strictly longer than
/// `min_len` characters.
#[must_use]
pub fn extract_keywords(text: &str, min_len: usize) -> BTreeSet<String> {
    let lower = text.to_lowercase();

    KEYWORD_DELIMITERS
        .split(&lower)
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .filter(|word| !STOP_WORDS.contains(*word))
        .filter(|word| word.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}
