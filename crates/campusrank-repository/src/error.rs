//! Error types for the repository layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No ranking type with the given name
    #[error("Ranking type not found: {name}")]
    NotFound { name: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// A stored or submitted ranking type breaks an invariant
    #[error("Invalid ranking type: {0}")]
    Invalid(String),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}

impl From<campusrank_core::CoreError> for RepositoryError {
    fn from(err: campusrank_core::CoreError) -> Self {
        RepositoryError::Invalid(err.to_string())
    }
}
