//! Section location within a job description.
//!
//! A section starts at the first occurrence of one of its keywords and runs
//! until the nearest following section header, or until a character cap
//! when no header follows. Matching is done against an ASCII-lowercased copy
//! of the text; since every keyword is ASCII, byte offsets in that copy are
//! valid offsets into the original.

use crate::patterns::NEXT_SECTION_HEADERS;

/// Returns the excerpt for the first keyword (in list order) found in `text`.
///
/// The excerpt keeps the original casing and is trimmed. Returns an empty
/// string when none of the keywords occur.
///
/// # Example
///
/// ```rust
/// use jd_extract::section::extract_section;
///
/// let text = "Responsibilities: Build things.\nRequirements: 5 years exp.";
/// let excerpt = extract_section(text, &["responsibilities"], 1000);
/// assert_eq!(excerpt, "Responsibilities: Build things.");
/// ```
#[must_use]
pub fn extract_section<'a>(text: &'a str, keywords: &[&str], char_limit: usize) -> &'a str {
    let lower = text.to_ascii_lowercase();

    for keyword in keywords {
        let Some(start) = lower.find(keyword) else {
            continue;
        };

        let end = find_next_section_start(&lower, start + keyword.len())
            .unwrap_or_else(|| char_limit_end(text, start, char_limit));

        tracing::trace!(keyword, start, end, "located section");
        return text[start..end].trim();
    }

    ""
}

/// Returns the byte index of the earliest next-section header at or after
/// `from`, if any.
///
/// Each header is searched independently; list order does not matter.
#[must_use]
pub fn find_next_section_start(lower: &str, from: usize) -> Option<usize> {
    let rest = lower.get(from..)?;

    NEXT_SECTION_HEADERS
        .iter()
        .filter_map(|header| rest.find(header))
        .min()
        .map(|offset| from + offset)
}

/// Byte index `limit` characters past `start`, or the end of `text`.
fn char_limit_end(text: &str, start: usize, limit: usize) -> usize {
    text[start..]
        .char_indices()
        .nth(limit)
        .map_or(text.len(), |(offset, _)| start + offset)
}
