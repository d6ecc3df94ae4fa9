// mov2mp4-core/src/error.rs
//
// Error types for the core library. Fatal precondition failures (missing
// tool, missing directory) are represented here and abort the batch with
// `?`; per-file conversion failures are NOT errors in this sense and are
// carried as `batch::ConversionOutcome::Failure` instead.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for mov2mp4 core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("required external tool '{0}' not found on this system")]
    DependencyNotFound(String),

    #[error("external tool '{0}' is present but its version check failed")]
    DependencyCheckFailed(String),

    #[error("failed to start external tool '{0}': {1}")]
    CommandStart(String, std::io::Error),

    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid path: {0}")]
    PathError(String),
}

/// Result type for mov2mp4 core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
