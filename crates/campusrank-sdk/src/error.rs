//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid request or ranking type
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] campusrank_core::CoreError),

    /// Ranking type storage error
    #[error("Repository error: {0}")]
    RepositoryError(#[from] campusrank_repository::RepositoryError),

    /// Data source or scoring error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] campusrank_runtime::RuntimeError),

    /// The ranking type is not configured
    #[error("Unknown ranking type: {0}")]
    UnknownRankingType(String),

    /// Resolution produced no colleges
    #[error("No ranking could be generated for {category}")]
    NoRankingProduced { category: String },
}

impl SdkError {
    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SdkError::InvalidInput(_) | SdkError::UnknownRankingType(_)
        ) || matches!(
            self,
            SdkError::RepositoryError(campusrank_repository::RepositoryError::Invalid(_))
        )
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
