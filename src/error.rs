use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating the scan root or reading a label file.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Open or UTF-8 decode failure. Per-file; never aborts the scan.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
