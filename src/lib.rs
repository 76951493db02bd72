//! # jd-extract
//!
//! Heuristic field extraction for free-form job description text.
//!
//! This library reads a job posting as plain text and pulls out the job
//! title, company name, required and preferred skills, and an excerpt of
//! the responsibilities section. Extraction is rule based: keyword
//! dictionaries, regular expressions, and positional heuristics. It is
//! deterministic and best effort.
//!
//! ## Quick Start
//!
//! ```rust
//! use jd_extract::analyze;
//!
//! let text = "Job Title: Senior Backend Engineer\n\
//!             Responsibilities: Build APIs in Java.\n\
//!             Requirements: 5 years experience with Docker.";
//!
//! let jd = analyze(text);
//! assert_eq!(jd.job_title, "Senior Backend Engineer");
//! assert_eq!(jd.responsibilities, "Responsibilities: Build APIs in Java.");
//! assert!(jd.required_skill_list().contains(&"docker"));
//! ```
//!
//! ## Features
//!
//! - **Title**: keyword scan of the first lines, then a labeled field, then
//!   the first short line, then `"Untitled Position"`
//! - **Company**: the capitalized name after `company`, `organization` or `at`
//! - **Skills**: dictionary terms plus keywords mined from the
//!   required/preferred sections
//! - **Responsibilities**: the raw responsibilities excerpt
//!
//! All dictionaries and patterns are compiled once and shared read-only, so
//! analysis can run from any number of threads without coordination.

mod analyze;
mod error;
mod options;
mod patterns;
mod result;

/// Field extractors (title, company, skills, responsibilities).
pub mod extractor;

/// Section location helpers.
pub mod section;

/// Keyword tokenization.
pub mod keywords;

/// Character encoding detection and transcoding.
pub mod encoding;

use std::collections::BTreeSet;
use std::io::Read;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::{SkillKind, UNTITLED_POSITION};
pub use options::Options;
pub use result::{JobDescription, SKILL_DELIMITER};

/// Analyzes a job description using default options.
///
/// Never fails: fields that cannot be found are left empty, and the title
/// falls back to `"Untitled Position"`.
///
/// # Example
///
/// ```rust
/// use jd_extract::analyze;
///
/// let jd = analyze("We need a Java and React developer");
/// assert!(jd.required_skill_list().contains(&"java"));
/// assert!(jd.required_skill_list().contains(&"react"));
/// ```
#[must_use]
pub fn analyze(text: &str) -> JobDescription {
    analyze_with_options(text, &Options::default())
}

/// Analyzes a job description with custom options.
///
/// # Example
///
/// ```rust
/// use jd_extract::{analyze_with_options, Options};
///
/// let options = Options {
///     max_input_len: Some(10_000),
///     ..Options::default()
/// };
/// let jd = analyze_with_options("Role: Site Reliability Engineer", &options);
/// assert_eq!(jd.job_title, "Site Reliability Engineer");
/// ```
#[must_use]
pub fn analyze_with_options(text: &str, options: &Options) -> JobDescription {
    analyze::analyze_text(text, options)
}

/// Analyzes a job description given as raw bytes.
///
/// The encoding is detected (BOM, then UTF-8, then windows-1252) and the
/// text is converted to UTF-8 before analysis.
///
/// # Example
///
/// ```rust
/// use jd_extract::analyze_bytes;
///
/// let jd = analyze_bytes(b"Caf\xE9 Manager\nWork at Bistro Group.");
/// assert_eq!(jd.job_title, "Café Manager");
/// ```
#[must_use]
pub fn analyze_bytes(bytes: &[u8]) -> JobDescription {
    analyze_bytes_with_options(bytes, &Options::default())
}

/// Analyzes a job description given as raw bytes with custom options.
///
/// This combines `analyze_bytes` and `analyze_with_options`: the encoding
/// is detected and converted first, then `options` apply to the decoded text.
///
/// # Example
///
/// ```rust
/// use jd_extract::{analyze_bytes_with_options, Options};
///
/// let options = Options {
///     max_input_len: Some(12),
///     ..Options::default()
/// };
/// let jd = analyze_bytes_with_options(b"Caf\xE9 Manager\nRequired: Terraform", &options);
/// assert_eq!(jd.job_title, "Café Manager");
/// assert!(jd.required_skills.is_empty());
/// ```
#[must_use]
pub fn analyze_bytes_with_options(bytes: &[u8], options: &Options) -> JobDescription {
    let text = encoding::transcode_to_utf8(bytes);
    analyze_with_options(&text, options)
}

/// Reads a job description from `reader` and analyzes it.
///
/// # Errors
///
/// Returns `Error::Io` if reading fails.
pub fn analyze_reader<R: Read>(reader: R, options: &Options) -> Result<JobDescription> {
    let text = encoding::read_to_utf8(reader)?;
    Ok(analyze_with_options(&text, options))
}

/// Extracts every candidate keyword from `text`, without section scoping.
///
/// Keywords are lowercased, deduplicated, longer than two characters, and
/// never stop words.
///
/// # Example
///
/// ```rust
/// use jd_extract::extract_all_keywords;
///
/// assert!(extract_all_keywords("The the AND of it is").is_empty());
/// assert!(extract_all_keywords("Rust; Tokio").contains("tokio"));
/// ```
#[must_use]
pub fn extract_all_keywords(text: &str) -> BTreeSet<String> {
    keywords::extract_keywords(text, Options::default().min_keyword_len)
}
