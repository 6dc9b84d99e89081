//! Error types for the spec module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur during spec operations.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Spec document not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported spec document format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
