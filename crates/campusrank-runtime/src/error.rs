//! Runtime error types

use campusrank_llm::LLMError;
use thiserror::Error;

/// Errors raised by data source calls
///
/// None of these abort a ranking run: the resolver logs them and falls back
/// or drops the affected college. A lookup that simply finds nothing is not
/// an error; sources report it as `Ok(None)` or an empty list.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The source's API key is not configured
    #[error("API key is not set for {0}")]
    CredentialMissing(String),

    /// Network or HTTP-level failure
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The source answered with something that could not be interpreted
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Scoring or rendering was asked for an unconfigured ranking type
    #[error("Unknown ranking type: {0}")]
    UnknownRankingType(String),
}

impl From<reqwest::Error> for RuntimeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RuntimeError::MalformedResponse(err.to_string())
        } else {
            RuntimeError::TransportFailure(err.to_string())
        }
    }
}

impl From<LLMError> for RuntimeError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::CredentialMissing(provider) => RuntimeError::CredentialMissing(provider),
            LLMError::InvalidResponse(msg) => RuntimeError::MalformedResponse(msg),
            LLMError::SerializationError(e) => RuntimeError::MalformedResponse(e.to_string()),
            other => RuntimeError::TransportFailure(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for RuntimeError {
    fn from(err: serde_json::Error) -> Self {
        RuntimeError::MalformedResponse(err.to_string())
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RuntimeError::CredentialMissing("Tavily".to_string());
        assert_eq!(err.to_string(), "API key is not set for Tavily");

        let err = RuntimeError::UnknownRankingType("NoSuchType".to_string());
        assert_eq!(err.to_string(), "Unknown ranking type: NoSuchType");
    }

    #[test]
    fn test_json_error_is_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RuntimeError = json_err.into();
        assert!(matches!(err, RuntimeError::MalformedResponse(_)));
    }

    #[test]
    fn test_llm_error_mapping() {
        let err: RuntimeError = LLMError::CredentialMissing("OpenAI".to_string()).into();
        assert!(matches!(err, RuntimeError::CredentialMissing(ref p) if p == "OpenAI"));

        let err: RuntimeError = LLMError::InvalidResponse("no content".to_string()).into();
        assert!(matches!(err, RuntimeError::MalformedResponse(_)));

        let err: RuntimeError = LLMError::ApiCallFailed("429".to_string()).into();
        assert!(matches!(err, RuntimeError::TransportFailure(_)));
    }
}
