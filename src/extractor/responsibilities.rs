//! Responsibilities excerpt extraction.

use crate::options::Options;
use crate::patterns::RESPONSIBILITY_SECTION_KEYWORDS;
use crate::section::extract_section;

/// Returns the responsibilities section verbatim, or an empty string.
#[must_use]
pub fn extract_responsibilities(text: &str, options: &Options) -> String {
    extract_section(text, RESPONSIBILITY_SECTION_KEYWORDS, options.section_char_limit).to_string()
}
