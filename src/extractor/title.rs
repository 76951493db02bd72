//! Job title extraction.
//!
//! Titles are found by an ordered chain of strategies. The first strategy
//! that yields a title wins; when none do, the title is
//! [`UNTITLED_POSITION`].

use crate::options::Options;
use crate::patterns::{HEADER_WORDS, TITLE_FIELD, TITLE_KEYWORDS, TITLE_LABEL_PREFIX};

/// Title used when no strategy finds one.
pub const UNTITLED_POSITION: &str = "Untitled Position";

type TitleStrategy = fn(&str, &Options) -> Option<String>;

/// Strategies in priority order, named for logging.
const STRATEGIES: &[(&str, TitleStrategy)] = &[
    ("keyword_scan", title_from_keyword_lines),
    ("labeled_field", title_from_labeled_field),
    ("first_short_line", title_from_first_short_line),
];

/// Extracts the job title from `text`. Never returns an empty string.
#[must_use]
pub fn extract_job_title(text: &str, options: &Options) -> String {
    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            let title = strategy(text, options)?;
            tracing::debug!(strategy = name, title = %title, "title strategy matched");
            Some(title)
        })
        .unwrap_or_else(|| UNTITLED_POSITION.to_string())
}

/// Looks for a title keyword in the first few lines, skipping blank ones.
///
/// Blank lines still count toward the window. A leading label such as
/// `Job Title:` is stripped from the matching line.
fn title_from_keyword_lines(text: &str, options: &Options) -> Option<String> {
    text.split('\n')
        .take(options.title_scan_lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| within(line, options.min_title_len, options.max_title_len))
        .filter(|line| {
            let lower = line.to_lowercase();
            TITLE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        })
        .map(|line| TITLE_LABEL_PREFIX.replace(line, "").trim().to_string())
        .find(|cleaned| !cleaned.is_empty())
}

/// Looks for a `Job Title:`, `Position:` or `Role:` field anywhere in the text.
///
/// Only the first such field is considered.
fn title_from_labeled_field(text: &str, options: &Options) -> Option<String> {
    let value = TITLE_FIELD.captures(text)?.get(2)?.as_str().trim();

    if value.is_empty() || value.chars().count() >= options.max_title_len {
        return None;
    }
    Some(value.to_string())
}

/// Takes the first short line that does not look like a section header.
fn title_from_first_short_line(text: &str, options: &Options) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| within(line, options.min_title_len, options.max_fallback_title_len))
        .find(|line| {
            let lower = line.to_lowercase();
            !HEADER_WORDS.iter().any(|word| lower.contains(word))
        })
        .map(str::to_string)
}

/// True when the character length of `line` lies strictly between the bounds.
fn within(line: &str, min: usize, max: usize) -> bool {
    let len = line.chars().count();
    len > min && len < max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(text: &str) -> String {
        extract_job_title(text, &Options::default())
    }

    #[test]
    fn keyword_line_with_label_is_stripped() {
        assert_eq!(title("Job Title: Senior Backend Engineer\nWe build things."), "Senior Backend Engineer");
    }

    #[test]
    fn keyword_line_wins_over_earlier_plain_line() {
        let text = "Acme Careers\nStaff Data Analyst\nPosition: Something Else";
        assert_eq!(title(text), "Staff Data Analyst");
    }

    #[test]
    fn keyword_scan_window_counts_blank_lines() {
        let text = "Acme Corp\n\n\n\n\nSoftware Engineer";
        assert_eq!(title_from_keyword_lines(text, &Options::default()), None);
        assert_eq!(title(text), "Acme Corp");
    }

    #[test]
    fn keyword_scan_skips_blank_lines_inside_window() {
        let text = "\n\nPlatform Architect\nAcme Corp";
        assert_eq!(title(text), "Platform Architect");
    }

    #[test]
    fn keyword_scan_limited_to_first_lines() {
        let text = "One line\nTwo line\nThree line\nFour line\nFive line\nPosition: Growth Hacker\nCloud Engineer";
        let found = title_from_keyword_lines(text, &Options::default());
        assert_eq!(found, None);
        // The labeled field elsewhere in the text is the next strategy.
        assert_eq!(title(text), "Growth Hacker");
    }

    #[test]
    fn keyword_match_is_substring() {
        // "lead" inside "leadership" still counts
        assert_eq!(title("Leadership Opportunities"), "Leadership Opportunities");
    }

    #[test]
    fn label_only_line_falls_through() {
        let text = "Role:\nSome company overview here";
        // Neither line carries a title keyword; the labeled field captures
        // the following line because `\s*` crosses the newline.
        assert_eq!(title(text), "Some company overview here");
    }

    #[test]
    fn labeled_field_rejects_long_values() {
        let text = format!("Intro text\nPosition: {}", "x".repeat(120));
        assert_eq!(title_from_labeled_field(&text, &Options::default()), None);
    }

    #[test]
    fn fallback_skips_header_like_lines() {
        let text = "About Us\nCompany Overview\nWe Make Widgets";
        assert_eq!(title(text), "We Make Widgets");
    }

    #[test]
    fn fallback_rejects_lines_outside_length_bounds() {
        let long = "y".repeat(85);
        let text = format!("abc\n{long}\nHello World");
        assert_eq!(title(&text), "Hello World");
    }

    #[test]
    fn sentinel_when_nothing_matches() {
        assert_eq!(title(""), UNTITLED_POSITION);
        assert_eq!(title("abc\nxy\n\n"), UNTITLED_POSITION);
        assert_eq!(title("Job Description"), UNTITLED_POSITION);
    }

    #[test]
    fn carriage_returns_are_trimmed() {
        assert_eq!(title("DevOps Specialist\r\nMore text"), "DevOps Specialist");
    }
}
