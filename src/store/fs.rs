use super::{GlobPattern, StoreError, TemplateStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Templates stored as plain files on local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

#[async_trait]
impl TemplateStore for FsStore {
    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok_and(|m| m.is_file())
    }

    async fn read(&self, path: &Path) -> Result<String, StoreError> {
        fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn glob(&self, pattern: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let pattern = GlobPattern::parse(pattern)?;
        if !pattern.dir().is_dir() {
            return Ok(Vec::new());
        }
        let mut matches = Vec::new();
        for entry in WalkDir::new(pattern.dir()).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| StoreError::Scan {
                dir: pattern.dir().to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() && pattern.matches(entry.path()) {
                matches.push(entry.into_path());
            }
        }
        matches.sort();
        Ok(matches)
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
