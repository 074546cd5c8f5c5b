use super::{ConfigError, TemplateConfig};
use crate::utils::get_app_path;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the config file (`~/.issue-template/config.toml`).
#[must_use]
pub fn config_path() -> PathBuf {
    get_app_path().join("config.toml")
}

/// Load the configuration from `path`.
///
/// Returns `Ok(TemplateConfig::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<TemplateConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(TemplateConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: TemplateConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
