//! Host-facing entry point.
//!
//! The host calls [`IssueTemplateHook::after_build_issue`] right after it has
//! built an issue from request params. The hook may rewrite the description
//! and nothing else, and it never fails: template handling is best-effort and
//! must not break issue construction.

mod draft;
mod event;

pub use draft::IssueDraft;
pub use event::FormEvent;

use crate::config::TemplateConfig;
use crate::reconcile::{apply_initial, reconcile_on_tracker_change, Outcome};
use crate::store::{FsStore, TemplateStore};
use crate::template::{TemplateError, TemplatePaths, TemplateResolver};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct IssueTemplateHook {
    config: TemplateConfig,
    resolver: TemplateResolver,
}

impl IssueTemplateHook {
    #[must_use]
    pub fn new(config: TemplateConfig, store: Arc<dyn TemplateStore>) -> Self {
        let resolver = TemplateResolver::new(TemplatePaths::new(config.templates_dir.clone()), store);
        Self { config, resolver }
    }

    /// Hook reading templates from `config.templates_dir` on local disk.
    #[must_use]
    pub fn with_fs_store(config: TemplateConfig) -> Self {
        Self::new(config, Arc::new(FsStore))
    }

    #[must_use]
    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    #[must_use]
    pub fn resolver(&self) -> &TemplateResolver {
        &self.resolver
    }

    /// Apply or reconcile the draft's description for `event`.
    ///
    /// Returns what happened, or `None` when the event was not for this hook
    /// or a template could not be read (logged at error level).
    pub async fn after_build_issue(
        &self,
        draft: &mut (dyn IssueDraft + Send),
        event: &FormEvent,
    ) -> Option<Outcome> {
        if !self.config.enabled {
            return None;
        }
        match self.run(draft, event).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    project = draft.project_id(),
                    tracker = draft.tracker_id(),
                    error = %e,
                    "Error applying issue template"
                );
                None
            }
        }
    }

    async fn run(
        &self,
        draft: &mut (dyn IssueDraft + Send),
        event: &FormEvent,
    ) -> Result<Option<Outcome>, TemplateError> {
        match event {
            FormEvent::InitialRender => {
                if !draft.is_new_record() {
                    debug!("Skipping template on existing issue");
                    return Ok(None);
                }
                let project = draft.project_id().map(String::from);
                let tracker = draft.tracker_id().map(String::from);
                let outcome = apply_initial(
                    &self.resolver,
                    project.as_deref(),
                    tracker.as_deref(),
                    |text| draft.set_description(text),
                )
                .await?;
                Ok(Some(outcome))
            }
            FormEvent::FieldUpdate {
                triggered_by,
                description,
                tracker_id,
                previous_tracker_id,
            } => {
                if triggered_by.as_deref() != Some(self.config.tracker_change_trigger.as_str()) {
                    debug!(?triggered_by, "Ignoring form update not caused by tracker change");
                    return Ok(None);
                }
                let project = draft.project_id().map(String::from);
                let new_tracker = tracker_id
                    .clone()
                    .or_else(|| draft.tracker_id().map(String::from));
                let submitted = description
                    .clone()
                    .unwrap_or_else(|| draft.description().to_string());
                let outcome = reconcile_on_tracker_change(
                    &self.resolver,
                    self.config.on_tracker_change,
                    project.as_deref(),
                    previous_tracker_id.as_deref(),
                    new_tracker.as_deref(),
                    &submitted,
                    |text| draft.set_description(text),
                )
                .await?;
                Ok(Some(outcome))
            }
        }
    }
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
