//! Read-only access to template files.
//!
//! The resolver never touches the file system directly; it goes through a
//! [`TemplateStore`] so hosts can back templates with anything that can answer
//! "does this path exist", "what does it contain" and "which paths match this
//! wildcard".

mod error;
mod fs;
mod memory;
mod pattern;

pub use error::StoreError;
pub use fs::FsStore;
pub use memory::MemoryStore;
pub use pattern::GlobPattern;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Whether a template file exists at `path`.
    async fn exists(&self, path: &Path) -> bool;

    /// Read the full content of the template at `path`.
    async fn read(&self, path: &Path) -> Result<String, StoreError>;

    /// List every path matching `pattern`, where `*` in the file name matches
    /// any run of characters. Results are sorted.
    async fn glob(&self, pattern: &Path) -> Result<Vec<PathBuf>, StoreError>;
}
