use super::types::TemplateScope;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name of the global fallback template.
pub const DEFAULT_TEMPLATE_FILE: &str = "default_issue_template.md";

/// Prefix shared by project- and tracker-level template file names.
pub const TEMPLATE_PREFIX: &str = "issue_template_";

/// Extension of every template file.
pub const TEMPLATE_EXTENSION: &str = ".md";

/// A path worth probing, tagged with the scope it would resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub scope: TemplateScope,
    pub path: PathBuf,
}

/// Naming convention for template files inside one templates directory:
///
/// - global: `default_issue_template.md`
/// - project: `issue_template_<project>.md`
/// - tracker: `issue_template_<project>_<tracker>.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePaths {
    dir: PathBuf,
}

impl TemplatePaths {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn default_path(&self) -> PathBuf {
        self.dir.join(DEFAULT_TEMPLATE_FILE)
    }

    #[must_use]
    pub fn project_path(&self, project: &str) -> PathBuf {
        self.dir
            .join(format!("{TEMPLATE_PREFIX}{project}{TEMPLATE_EXTENSION}"))
    }

    #[must_use]
    pub fn tracker_path(&self, project: &str, tracker: &str) -> PathBuf {
        self.dir.join(format!(
            "{TEMPLATE_PREFIX}{project}_{tracker}{TEMPLATE_EXTENSION}"
        ))
    }

    /// Wildcard matching every tracker-level template of `project`.
    #[must_use]
    pub fn tracker_glob(&self, project: &str) -> PathBuf {
        self.dir
            .join(format!("{TEMPLATE_PREFIX}{project}_*{TEMPLATE_EXTENSION}"))
    }

    /// Recover the tracker id from a path produced by [`Self::tracker_glob`].
    #[must_use]
    pub fn tracker_of(&self, project: &str, path: &Path) -> Option<String> {
        let prefix = format!("{TEMPLATE_PREFIX}{project}_");
        path.file_name()?
            .to_str()?
            .strip_prefix(prefix.as_str())?
            .strip_suffix(TEMPLATE_EXTENSION)
            .filter(|t| !t.is_empty())
            .map(String::from)
    }

    /// Candidate paths from most to least specific. Absent ids skip their
    /// candidate; the global default is always last.
    #[must_use]
    pub fn candidates(&self, project: Option<&str>, tracker: Option<&str>) -> Vec<Candidate> {
        let mut candidates = Vec::with_capacity(3);
        if let Some(project) = project {
            if let Some(tracker) = tracker {
                candidates.push(Candidate {
                    scope: TemplateScope::ProjectTracker,
                    path: self.tracker_path(project, tracker),
                });
            }
            candidates.push(Candidate {
                scope: TemplateScope::Project,
                path: self.project_path(project),
            });
        }
        candidates.push(Candidate {
            scope: TemplateScope::Global,
            path: self.default_path(),
        });
        candidates
    }
}

/// Accept an id only if it is safe to splice into a file name.
///
/// Blank ids are absent. Ids with anything other than ASCII letters, digits,
/// `-` or `_` are logged and treated as absent so no probe leaves the
/// templates directory.
#[must_use]
pub fn sanitize_id<'a>(kind: &str, id: Option<&'a str>) -> Option<&'a str> {
    let id = id.map(str::trim).filter(|s| !s.is_empty())?;
    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Some(id)
    } else {
        warn!(kind, id, "Ignoring malformed id");
        None
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
