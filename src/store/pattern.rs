use super::StoreError;
use regex::Regex;
use std::path::{Path, PathBuf};

/// A single-directory wildcard pattern such as
/// `templates/issue_template_alpha_*.md`.
///
/// Only the file name may contain `*`; the directory part is matched exactly.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    dir: PathBuf,
    name: Regex,
}

impl GlobPattern {
    pub fn parse(pattern: &Path) -> Result<Self, StoreError> {
        let file_name = pattern
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StoreError::InvalidPattern(pattern.display().to_string()))?;
        let dir = match pattern.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let escaped: Vec<String> = file_name.split('*').map(regex::escape).collect();
        let name = Regex::new(&format!("^{}$", escaped.join(".*")))
            .map_err(|e| StoreError::InvalidPattern(e.to_string()))?;
        Ok(Self { dir, name })
    }

    /// Directory the pattern scans.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether `path` sits directly in [`Self::dir`] and its file name matches.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let in_dir = path.parent().is_some_and(|p| p == self.dir);
        in_dir
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| self.name.is_match(n))
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
