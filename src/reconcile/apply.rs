use super::classify::{classify, Classification};
use super::normalize::same_text;
use crate::template::{TemplateError, TemplateResolver, TemplateScope};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Which template replaces template text after a tracker change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementPolicy {
    /// Only the new tracker's own template. Without one the text is cleared.
    #[default]
    TrackerOnly,
    /// Full tracker, project, global fallback, as on initial render.
    Fallback,
}

/// What happened to the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Description replaced with a template of this scope.
    Applied(TemplateScope),
    /// The resolved template already matches the description.
    Unchanged,
    /// Stale template text removed; the new tracker has no template.
    Cleared,
    /// User-authored text left alone.
    Preserved,
    /// Initial render found no template; the host default stays.
    NoTemplate,
}

/// Fill the description of a freshly built issue.
pub async fn apply_initial<F>(
    resolver: &TemplateResolver,
    project: Option<&str>,
    tracker: Option<&str>,
    set_description: F,
) -> Result<Outcome, TemplateError>
where
    F: FnOnce(String),
{
    let Some(template) = resolver.resolve(project, tracker).await? else {
        warn!(
            project,
            tracker,
            dir = %resolver.paths().dir().display(),
            "No issue template found"
        );
        return Ok(Outcome::NoTemplate);
    };
    info!(
        project,
        tracker,
        scope = template.scope.as_str(),
        "Applied issue template"
    );
    let scope = template.scope;
    set_description(template.content);
    Ok(Outcome::Applied(scope))
}

/// Swap the description after the tracker changed, unless the user wrote it.
///
/// `submitted` is the description as posted by the form. Template-derived
/// text is replaced by the new tracker's template, or cleared when there is
/// none; user-authored text is never touched.
pub async fn reconcile_on_tracker_change<F>(
    resolver: &TemplateResolver,
    policy: ReplacementPolicy,
    project: Option<&str>,
    old_tracker: Option<&str>,
    new_tracker: Option<&str>,
    submitted: &str,
    set_description: F,
) -> Result<Outcome, TemplateError>
where
    F: FnOnce(String),
{
    if classify(resolver, project, submitted).await? == Classification::UserAuthored {
        info!(
            project,
            old_tracker, new_tracker, "Keeping user-authored description on tracker change"
        );
        return Ok(Outcome::Preserved);
    }

    let replacement = match policy {
        ReplacementPolicy::TrackerOnly => resolver.resolve_tracker(project, new_tracker).await?,
        ReplacementPolicy::Fallback => resolver.resolve(project, new_tracker).await?,
    };
    match replacement {
        Some(template) if same_text(&template.content, submitted) => {
            debug!(
                project,
                new_tracker,
                scope = template.scope.as_str(),
                "Description already matches template"
            );
            Ok(Outcome::Unchanged)
        }
        Some(template) => {
            info!(
                project,
                old_tracker,
                new_tracker,
                scope = template.scope.as_str(),
                "Replaced template description on tracker change"
            );
            let scope = template.scope;
            set_description(template.content);
            Ok(Outcome::Applied(scope))
        }
        None => {
            info!(
                project,
                old_tracker, new_tracker, "No template for new tracker, clearing description"
            );
            set_description(String::new());
            Ok(Outcome::Cleared)
        }
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
