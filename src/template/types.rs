use serde::Serialize;
use std::path::PathBuf;

/// How specific a template is. Later variants win over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateScope {
    Global,
    Project,
    ProjectTracker,
}

impl TemplateScope {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateScope::Global => "global",
            TemplateScope::Project => "project",
            TemplateScope::ProjectTracker => "project+tracker",
        }
    }
}

/// A template file read from the store. Content is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub scope: TemplateScope,
    pub project: Option<String>,
    pub tracker: Option<String>,
    pub path: PathBuf,
    pub content: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
