//! Skill extraction.
//!
//! Skills come from two sources that are merged into one set:
//!
//! 1. The fixed skill dictionary, matched as substrings of the whole
//!    lowercased text. This ignores sections entirely, so a dictionary skill
//!    present anywhere shows up as both required and preferred.
//! 2. Keywords mined from the required or preferred section.

use std::collections::BTreeSet;

use crate::keywords::extract_keywords;
use crate::options::Options;
use crate::patterns::{PREFERRED_SECTION_KEYWORDS, REQUIRED_SECTION_KEYWORDS, SKILL_DICTIONARY};
use crate::section::extract_section;

/// Which skill list to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    /// Skills from the required / qualifications / must-have section.
    Required,
    /// Skills from the preferred / nice-to-have / plus section.
    Preferred,
}

impl SkillKind {
    /// Keywords that locate this kind's section, in priority order.
    #[must_use]
    pub const fn section_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Required => REQUIRED_SECTION_KEYWORDS,
            Self::Preferred => PREFERRED_SECTION_KEYWORDS,
        }
    }
}

/// Extracts a deduplicated set of lowercase skills.
#[must_use]
pub fn extract_skills(text: &str, kind: SkillKind, options: &Options) -> BTreeSet<String> {
    let mut skills = dictionary_skills(text);

    let section = extract_section(text, kind.section_keywords(), options.section_char_limit);
    let mined = extract_keywords(section, options.min_keyword_len);

    tracing::trace!(
        ?kind,
        dictionary = skills.len(),
        section_chars = section.len(),
        mined = mined.len(),
        "skills collected"
    );

    skills.extend(mined);
    skills
}

/// Dictionary skills occurring anywhere in `text`.
fn dictionary_skills(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();

    SKILL_DICTIONARY
        .iter()
        .filter(|skill| lower.contains(*skill))
        .map(|skill| (*skill).to_string())
        .collect()
}
