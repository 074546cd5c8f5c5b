//! Plugin configuration loaded from a TOML file.
//!
//! Built once at process start and handed to
//! [`IssueTemplateHook`](crate::hook::IssueTemplateHook); nothing in the crate
//! looks configuration up on its own.

mod loader;

pub use loader::{config_path, load_config};

use crate::reconcile::ReplacementPolicy;
use crate::utils::get_app_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Form-update marker the host sends when the tracker select changed.
pub const DEFAULT_TRACKER_CHANGE_TRIGGER: &str = "issue_tracker_id";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Directory holding `default_issue_template.md` and the
    /// `issue_template_*.md` files.
    pub templates_dir: PathBuf,
    /// When false the hook does nothing.
    pub enabled: bool,
    /// Value of the host's `form_update_triggered_by` field that means
    /// "the tracker changed".
    pub tracker_change_trigger: String,
    /// Which template replaces template text after a tracker change.
    pub on_tracker_change: ReplacementPolicy,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            templates_dir: get_app_path().join("templates"),
            enabled: true,
            tracker_change_trigger: DEFAULT_TRACKER_CHANGE_TRIGGER.to_string(),
            on_tracker_change: ReplacementPolicy::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
