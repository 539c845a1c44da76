//! Error types for addons-core

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in build-pipeline operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Platform error: {0}")]
    Platform(#[from] addons_platform::PlatformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown component: '{0}'")]
    UnknownComponent(String),

    #[error("No components found under '{}'", .0.display())]
    NoComponents(PathBuf),

    #[error("Command '{program}' failed with exit code {code:?}")]
    CommandFailed { program: String, code: Option<i32> },
}
