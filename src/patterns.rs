//! Compiled regex patterns and keyword dictionaries for field extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`, and every
//! dictionary is a `'static` slice. Nothing here is mutated after startup.
//! Entries are organized by the extractor that consumes them.

#![allow(clippy::expect_used)]

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Title Extraction
// =============================================================================

/// Words that mark a line as a likely job title.
///
/// Matched as case-insensitive substrings, so "lead" also matches "leadership".
pub const TITLE_KEYWORDS: &[&str] = &[
    "engineer", "developer", "manager", "analyst", "designer", "consultant",
    "architect", "specialist", "coordinator", "lead", "director", "officer",
    "administrator", "technician", "scientist", "researcher", "associate",
    "executive", "supervisor", "assistant", "representative", "agent",
    "programmer", "tester", "qa", "devops", "sre", "scrum master", "product owner",
];

/// Words that mark a line as a section header rather than a title.
pub const HEADER_WORDS: &[&str] = &["description", "about", "overview", "summary", "company"];

/// Matches a leading field label such as `Job Title:` on a title line.
pub static TITLE_LABEL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(position:|job title:|role:|title:)\s*").expect("TITLE_LABEL_PREFIX regex")
});

/// Matches a labeled title field anywhere in the text; group 2 is the value.
pub static TITLE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(job title|position|role):\s*([^\n]+)").expect("TITLE_FIELD regex")
});

// =============================================================================
// Company Extraction
// =============================================================================

/// Matches a company name introduced by `company`, `organization` or `at`.
///
/// Only the introducing keyword is case-insensitive; the captured name
/// (group 2) must start with an uppercase ASCII letter.
pub static COMPANY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:(company|organization|at))\s+([A-Z][a-zA-Z\s&]+)").expect("COMPANY_NAME regex")
});

// =============================================================================
// Skill Extraction
// =============================================================================

/// Known technology and skill terms, matched as lowercase substrings.
pub const SKILL_DICTIONARY: &[&str] = &[
    "java", "python", "javascript", "react", "angular", "vue", "node.js", "spring boot",
    "sql", "mysql", "postgresql", "mongodb", "aws", "azure", "docker", "kubernetes",
    "git", "jenkins", "ci/cd", "rest api", "microservices", "agile", "scrum",
    "machine learning", "ai", "data analysis", "html", "css", "typescript",
    "c++", "c#", ".net", "php", "ruby", "go", "kotlin", "swift",
    "redux", "graphql", "webpack", "linux", "unix", "bash",
];

/// Keywords locating the required-skills section, in priority order.
pub const REQUIRED_SECTION_KEYWORDS: &[&str] = &["required", "qualifications", "must have"];

/// Keywords locating the preferred-skills section, in priority order.
pub const PREFERRED_SECTION_KEYWORDS: &[&str] = &["preferred", "nice to have", "plus"];

// =============================================================================
// Responsibility Extraction
// =============================================================================

/// Keywords locating the responsibilities section, in priority order.
pub const RESPONSIBILITY_SECTION_KEYWORDS: &[&str] = &["responsibilities", "duties", "you will", "role"];

// =============================================================================
// Section Boundaries
// =============================================================================

/// Headers that end the current section. Searched independently; the
/// earliest occurrence wins.
pub const NEXT_SECTION_HEADERS: &[&str] = &[
    "requirements", "qualifications", "responsibilities", "benefits",
    "about us", "about the company", "equal opportunity",
];

// =============================================================================
// Keyword Tokenization
// =============================================================================

/// Common English function words dropped from keyword mining.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from",
        "has", "he", "in", "is", "it", "its", "of", "on", "that", "the",
        "to", "was", "will", "with", "this", "but", "they", "have",
    ]
    .into_iter()
    .collect()
});

/// Matches runs of whitespace and the punctuation that separates keywords.
pub static KEYWORD_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s,;.()\[\]{}]+").expect("KEYWORD_DELIMITERS regex")
});
