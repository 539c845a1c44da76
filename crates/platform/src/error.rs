//! Error types for addons-platform

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Failed to determine home directory")]
    NoHomeDirectory,

    #[error("No addon repository found above '{}' (expected 'addons/' and 'web/' directories)", .0.display())]
    RepoRootNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
