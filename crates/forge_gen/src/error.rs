//! Error types for the generation engine.

use thiserror::Error;

/// Result type alias for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur during artifact generation.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Module name is empty; nothing to generate")]
    EmptyModuleName,

    #[error("Models '{first}' and '{second}' both reduce to the artifact stem '{stem}'; \
             their generated files and class names would collide")]
    DuplicateModelArtifact {
        stem: String,
        first: String,
        second: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
