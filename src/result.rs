//! Result type for job description analysis.
//!
//! `JobDescription` is the structured record handed back to callers. It is
//! a plain owned value; storing or exposing it is up to the caller.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Delimiter joining skills in the rendered skill fields.
pub const SKILL_DELIMITER: &str = ", ";

/// Structured fields extracted from a job description.
///
/// Serializes with camelCase field names (`jobTitle`, `requiredSkills`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    /// The analyzed input, verbatim.
    pub description: String,

    /// Job title. Never empty after analysis; `"Untitled Position"` when no
    /// heuristic matched.
    pub job_title: String,

    /// Company name, or empty when none was found.
    pub company_name: String,

    /// Required skills: lowercase, deduplicated, joined with `", "`.
    pub required_skills: String,

    /// Preferred skills: lowercase, deduplicated, joined with `", "`.
    pub preferred_skills: String,

    /// Excerpt of the responsibilities section in its original casing, or
    /// empty when no such section exists.
    pub responsibilities: String,
}

impl JobDescription {
    /// Required skills split back into individual entries.
    #[must_use]
    pub fn required_skill_list(&self) -> Vec<&str> {
        split_skills(&self.required_skills)
    }

    /// Preferred skills split back into individual entries.
    #[must_use]
    pub fn preferred_skill_list(&self) -> Vec<&str> {
        split_skills(&self.preferred_skills)
    }

    /// Serializes the record as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Joins a skill set into its rendered form.
pub(crate) fn join_skills<I, S>(skills: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(SKILL_DELIMITER)
}

fn split_skills(rendered: &str) -> Vec<&str> {
    if rendered.is_empty() {
        return Vec::new();
    }
    rendered.split(SKILL_DELIMITER).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_empty() {
        let jd = JobDescription::default();
        assert!(jd.job_title.is_empty());
        assert!(jd.required_skill_list().is_empty());
        assert!(jd.preferred_skill_list().is_empty());
    }

    #[test]
    fn skill_lists_split_on_delimiter() {
        let jd = JobDescription {
            required_skills: join_skills(["ci/cd", "rust"]),
            ..JobDescription::default()
        };
        assert_eq!(jd.required_skills, "ci/cd, rust");
        assert_eq!(jd.required_skill_list(), vec!["ci/cd", "rust"]);
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let jd = JobDescription {
            job_title: "QA Lead".to_string(),
            ..JobDescription::default()
        };
        let json = match jd.to_json() {
            Ok(json) => json,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert!(json.contains(r#""jobTitle":"QA Lead""#));
        assert!(json.contains(r#""companyName":"""#));
        assert!(json.contains(r#""requiredSkills""#));
        assert!(json.contains(r#""preferredSkills""#));
    }

    #[test]
    fn deserializes_from_camel_case_json() {
        let json = r#"{
            "description": "d",
            "jobTitle": "Engineer",
            "companyName": "Acme",
            "requiredSkills": "go, rust",
            "preferredSkills": "",
            "responsibilities": "Ship."
        }"#;
        let jd: JobDescription = match serde_json::from_str(json) {
            Ok(jd) => jd,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(jd.company_name, "Acme");
        assert_eq!(jd.required_skill_list(), vec!["go", "rust"]);
    }
}
