//! Mock LLM provider for testing

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Handler = Arc<dyn Fn(&LLMRequest) -> Result<String> + Send + Sync>;

/// Mock LLM provider for testing
///
/// Answers every request with a fixed response, an error, or whatever a
/// prompt-aware handler returns. Calls are counted.
pub struct MockProvider {
    name: String,
    handler: Handler,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::with_response("Mock LLM response".to_string())
    }

    /// Create with custom default response
    pub fn with_response(response: String) -> Self {
        Self::with_handler(move |_| Ok(response.clone()))
    }

    /// Create a provider whose every call fails
    pub fn failing() -> Self {
        Self::with_handler(|_| Err(LLMError::ApiCallFailed("mock provider unavailable".to_string())))
    }

    /// Create with a handler that builds the response from the request
    pub fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&LLMRequest) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            name: "mock".to_string(),
            handler: Arc::new(handler),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let content = (self.handler)(&request)?;
        Ok(LLMResponse::new(content, request.model)
            .with_tokens(10)
            .with_finish_reason("stop".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
