use super::{GlobPattern, StoreError, TemplateStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory template store.
///
/// Paths registered with [`MemoryStore::insert_unreadable`] exist but fail on
/// read, which lets hosts exercise their failure handling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), Some(content.into()));
    }

    pub fn insert_unreadable(&mut self, path: impl Into<PathBuf>) {
        self.files.insert(path.into(), None);
    }
}

#[async_trait]
impl TemplateStore for MemoryStore {
    async fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    async fn read(&self, path: &Path) -> Result<String, StoreError> {
        match self.files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(StoreError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "unreadable"),
            }),
            None => Err(StoreError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }

    async fn glob(&self, pattern: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let pattern = GlobPattern::parse(pattern)?;
        Ok(self
            .files
            .keys()
            .filter(|path| pattern.matches(path))
            .cloned()
            .collect())
    }
}
