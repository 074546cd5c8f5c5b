use super::normalize::normalize;
use crate::template::{TemplateError, TemplateResolver};
use std::collections::HashSet;
use tracing::debug;

/// Whether a description may be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Blank, or identical (after normalization) to a template of the project.
    TemplateDerived,
    /// Anything else. Never overwritten.
    UserAuthored,
}

/// Classify `submitted` against every template applicable to `project`.
///
/// Tracker-level templates of all trackers count, not just the previous one:
/// the form may already have gone through several tracker switches.
pub async fn classify(
    resolver: &TemplateResolver,
    project: Option<&str>,
    submitted: &str,
) -> Result<Classification, TemplateError> {
    if submitted.trim().is_empty() {
        return Ok(Classification::TemplateDerived);
    }

    let known: HashSet<String> = resolver
        .applicable_templates(project)
        .await?
        .iter()
        .map(|t| normalize(&t.content))
        .collect();

    let classification = if known.contains(&normalize(submitted)) {
        Classification::TemplateDerived
    } else {
        Classification::UserAuthored
    };
    debug!(
        ?classification,
        templates = known.len(),
        "Classified submitted description"
    );
    Ok(classification)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
