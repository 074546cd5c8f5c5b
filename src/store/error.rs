use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read template '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan '{}': {message}", .dir.display())]
    Scan { dir: PathBuf, message: String },

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),
}
