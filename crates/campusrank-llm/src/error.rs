//! Error types for CampusRank LLM module

use thiserror::Error;

/// Result type alias for LLM operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// LLM module errors
#[derive(Debug, Error)]
pub enum LLMError {
    /// No API key configured for the provider
    #[error("API key is not set for {0}")]
    CredentialMissing(String),

    /// External API call failed
    #[error("External API call failed: {0}")]
    ApiCallFailed(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl LLMError {
    /// Whether the error came from configuration rather than the remote call
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, LLMError::CredentialMissing(_))
    }
}
