//! Field extractors.
//!
//! Each extractor scans the same input text independently and never looks
//! at another extractor's output.
//!
//! # Module Structure
//!
//! - `title`: Job title via an ordered chain of fallback strategies
//! - `company`: Company name via a single pattern
//! - `skills`: Required/preferred skills from the dictionary and section keywords
//! - `responsibilities`: Raw excerpt of the responsibilities section
//!
//! # Usage
//!
//! ```rust
//! use jd_extract::extractor::{extract_company_name, extract_job_title, extract_skills, SkillKind};
//! use jd_extract::Options;
//!
//! let text = "Backend Engineer\nJoin us at Acme.\nRequired: Rust, PostgreSQL";
//! let options = Options::default();
//!
//! assert_eq!(extract_job_title(text, &options), "Backend Engineer");
//! assert_eq!(extract_company_name(text), "Acme");
//! assert!(extract_skills(text, SkillKind::Required, &options).contains("postgresql"));
//! ```

pub mod company;
pub mod responsibilities;
pub mod skills;
pub mod title;

pub use company::extract_company_name;
pub use responsibilities::extract_responsibilities;
pub use skills::{extract_skills, SkillKind};
pub use title::{extract_job_title, UNTITLED_POSITION};
