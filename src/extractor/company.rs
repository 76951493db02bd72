//! Company name extraction.

use crate::patterns::COMPANY_NAME;

/// Returns the company name following the first `company`, `organization`
/// or `at`, or an empty string.
///
/// Only the first match is used. Keywords are matched as substrings, so the
/// `at` in "that" also introduces a name.
#[must_use]
pub fn extract_company_name(text: &str) -> String {
    COMPANY_NAME
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|name| name.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_after_at() {
        assert_eq!(extract_company_name("Senior Engineer at Globex Corporation."), "Globex Corporation");
    }

    #[test]
    fn name_with_ampersand() {
        assert_eq!(extract_company_name("Organization: none\nJoin the organization Johnson & Johnson!"), "Johnson & Johnson");
    }

    #[test]
    fn only_first_match_counts() {
        assert_eq!(extract_company_name("Work at Initech, not at Hooli."), "Initech");
    }

    #[test]
    fn empty_when_no_capitalized_name_follows() {
        assert_eq!(extract_company_name("our company is great and we work at night"), "");
        assert_eq!(extract_company_name(""), "");
    }

    #[test]
    fn keyword_inside_word_still_matches() {
        assert_eq!(extract_company_name("Is that Umbrella Labs?"), "Umbrella Labs");
    }
}
