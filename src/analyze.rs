//! Analysis pipeline.
//!
//! Runs the four extractors over the same text and assembles their output
//! into a `JobDescription`. No extractor depends on another's result.

use crate::extractor::{
    extract_company_name, extract_job_title, extract_responsibilities, extract_skills, SkillKind,
};
use crate::options::Options;
use crate::result::{join_skills, JobDescription};

/// Main entry point for job description analysis.
pub(crate) fn analyze_text(text: &str, options: &Options) -> JobDescription {
    let analyzed = options.bounded(text);

    tracing::debug!(
        input_bytes = text.len(),
        analyzed_bytes = analyzed.len(),
        "analyzing job description"
    );

    let job_title = extract_job_title(analyzed, options);
    let company_name = extract_company_name(analyzed);
    let required = extract_skills(analyzed, SkillKind::Required, options);
    let preferred = extract_skills(analyzed, SkillKind::Preferred, options);
    let responsibilities = extract_responsibilities(analyzed, options);

    tracing::debug!(
        title = %job_title,
        company = %company_name,
        required_skills = required.len(),
        preferred_skills = preferred.len(),
        responsibilities_bytes = responsibilities.len(),
        "analysis complete"
    );

    JobDescription {
        description: text.to_string(),
        job_title,
        company_name,
        required_skills: join_skills(&required),
        preferred_skills: join_skills(&preferred),
        responsibilities,
    }
}
