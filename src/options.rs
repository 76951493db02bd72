//! Configuration options for job description analysis.
//!
//! The `Options` struct exposes the positional thresholds used by the
//! heuristics. Defaults reproduce the stock extraction rules; override
//! individual fields to tune them.

/// Configuration options for job description analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use jd_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     section_char_limit: 500,
///     max_input_len: Some(20_000),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of lines at the top of the text examined for title keywords.
    ///
    /// Blank lines count toward this window but are never matched.
    ///
    /// Default: `5`
    pub title_scan_lines: usize,

    /// Exclusive lower bound on title length (characters).
    ///
    /// Applies to the keyword scan and to the first-short-line fallback.
    ///
    /// Default: `3`
    pub min_title_len: usize,

    /// Exclusive upper bound on title length (characters) for the keyword
    /// scan and the labeled-field pattern.
    ///
    /// Default: `100`
    pub max_title_len: usize,

    /// Exclusive upper bound on title length (characters) for the
    /// first-short-line fallback.
    ///
    /// Default: `80`
    pub max_fallback_title_len: usize,

    /// Maximum excerpt length (characters) when no following section
    /// header bounds a section.
    ///
    /// Default: `1000`
    pub section_char_limit: usize,

    /// Keyword tokens must be strictly longer than this (characters).
    ///
    /// Default: `2`
    pub min_keyword_len: usize,

    /// Optional cap on the number of characters analyzed.
    ///
    /// Matching and scanning costs grow with input length. When set, only
    /// the leading `max_input_len` characters are examined. The returned
    /// `description` is always the full input.
    ///
    /// Default: `None`
    pub max_input_len: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            title_scan_lines: 5,
            min_title_len: 3,
            max_title_len: 100,
            max_fallback_title_len: 80,
            section_char_limit: 1000,
            min_keyword_len: 2,
            max_input_len: None,
        }
    }
}

impl Options {
    /// Returns the portion of `text` the extractors examine: the whole text,
    /// or its first `max_input_len` characters.
    #[must_use]
    pub fn bounded<'a>(&self, text: &'a str) -> &'a str {
        match self.max_input_len {
            Some(limit) => match text.char_indices().nth(limit) {
                Some((end, _)) => &text[..end],
                None => text,
            },
            None => text,
        }
    }
}
