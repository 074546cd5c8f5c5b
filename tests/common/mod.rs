//! Common test utilities

use issue_template::{IssueDraft, IssueTemplateHook, TemplateConfig};
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write template files into `dir`
pub async fn write_templates(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        tokio::fs::write(dir.join(name), content)
            .await
            .expect("Failed to write template");
    }
}

/// Hook reading templates from `dir` on disk with default settings
#[allow(dead_code)] // Not every test file builds a hook
pub fn fs_hook(dir: &Path) -> IssueTemplateHook {
    IssueTemplateHook::with_fs_store(TemplateConfig {
        templates_dir: dir.to_path_buf(),
        ..Default::default()
    })
}

/// Minimal host issue
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct TestIssue {
    pub project: Option<String>,
    pub tracker: Option<String>,
    pub description: String,
    pub persisted: bool,
}

#[allow(dead_code)]
impl TestIssue {
    pub fn new(project: &str, tracker: &str) -> Self {
        Self {
            project: Some(project.to_string()),
            tracker: Some(tracker.to_string()),
            ..Default::default()
        }
    }
}

impl IssueDraft for TestIssue {
    fn project_id(&self) -> Option<&str> {
        self.project.as_deref()
    }
    fn tracker_id(&self) -> Option<&str> {
        self.tracker.as_deref()
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn set_description(&mut self, description: String) {
        self.description = description;
    }
    fn is_new_record(&self) -> bool {
        !self.persisted
    }
}
