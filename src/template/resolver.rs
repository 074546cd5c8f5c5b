use super::error::TemplateError;
use super::paths::{sanitize_id, Candidate, TemplatePaths};
use super::types::{Template, TemplateScope};
use crate::store::TemplateStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Picks the most specific template for a project/tracker pair.
#[derive(Clone)]
pub struct TemplateResolver {
    paths: TemplatePaths,
    store: Arc<dyn TemplateStore>,
}

impl TemplateResolver {
    #[must_use]
    pub fn new(paths: TemplatePaths, store: Arc<dyn TemplateStore>) -> Self {
        Self { paths, store }
    }

    #[must_use]
    pub fn paths(&self) -> &TemplatePaths {
        &self.paths
    }

    /// Resolve the template for `(project, tracker)`.
    ///
    /// Tries `issue_template_<project>_<tracker>.md`, then
    /// `issue_template_<project>.md`, then `default_issue_template.md`, and
    /// returns the first that exists. `Ok(None)` when none does.
    pub async fn resolve(
        &self,
        project: Option<&str>,
        tracker: Option<&str>,
    ) -> Result<Option<Template>, TemplateError> {
        let project = sanitize_id("project", project);
        let tracker = sanitize_id("tracker", tracker);
        self.first_existing(self.paths.candidates(project, tracker), project, tracker)
            .await
    }

    /// Resolve only `issue_template_<project>_<tracker>.md`, without falling
    /// back to the project or global template.
    pub async fn resolve_tracker(
        &self,
        project: Option<&str>,
        tracker: Option<&str>,
    ) -> Result<Option<Template>, TemplateError> {
        let project = sanitize_id("project", project);
        let tracker = sanitize_id("tracker", tracker);
        let candidates = self
            .paths
            .candidates(project, tracker)
            .into_iter()
            .filter(|c| c.scope == TemplateScope::ProjectTracker)
            .collect();
        self.first_existing(candidates, project, tracker).await
    }

    async fn first_existing(
        &self,
        candidates: Vec<Candidate>,
        project: Option<&str>,
        tracker: Option<&str>,
    ) -> Result<Option<Template>, TemplateError> {
        for candidate in candidates {
            if !self.store.exists(&candidate.path).await {
                debug!(path = %candidate.path.display(), "Template candidate not found");
                continue;
            }
            let content = self.store.read(&candidate.path).await?;
            info!(
                scope = candidate.scope.as_str(),
                path = %candidate.path.display(),
                "Resolved issue template"
            );
            let (project, tracker) = match candidate.scope {
                TemplateScope::Global => (None, None),
                TemplateScope::Project => (project, None),
                TemplateScope::ProjectTracker => (project, tracker),
            };
            return Ok(Some(Template {
                scope: candidate.scope,
                project: project.map(String::from),
                tracker: tracker.map(String::from),
                path: candidate.path,
                content,
            }));
        }
        Ok(None)
    }

    /// Every template that could apply to `project`: the global default, the
    /// project-level template and all of the project's tracker-level
    /// templates, whichever exist.
    pub async fn applicable_templates(
        &self,
        project: Option<&str>,
    ) -> Result<Vec<Template>, TemplateError> {
        let mut templates = Vec::new();

        let default_path = self.paths.default_path();
        if self.store.exists(&default_path).await {
            let content = self.store.read(&default_path).await?;
            templates.push(Template {
                scope: TemplateScope::Global,
                project: None,
                tracker: None,
                path: default_path,
                content,
            });
        }

        let Some(project) = sanitize_id("project", project) else {
            return Ok(templates);
        };

        let project_path = self.paths.project_path(project);
        if self.store.exists(&project_path).await {
            let content = self.store.read(&project_path).await?;
            templates.push(Template {
                scope: TemplateScope::Project,
                project: Some(project.to_string()),
                tracker: None,
                path: project_path,
                content,
            });
        }

        for path in self.store.glob(&self.paths.tracker_glob(project)).await? {
            let content = self.store.read(&path).await?;
            templates.push(Template {
                scope: TemplateScope::ProjectTracker,
                project: Some(project.to_string()),
                tracker: self.paths.tracker_of(project, &path),
                path,
                content,
            });
        }

        debug!(
            project,
            count = templates.len(),
            "Collected applicable issue templates"
        );
        Ok(templates)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
