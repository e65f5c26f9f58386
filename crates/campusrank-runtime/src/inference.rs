//! Text generation on top of an LLM client
//!
//! Both metric estimation and article writing send a single prompt and want a
//! trimmed string back. [`TextGenerator`] fixes the generation parameters so
//! callers only supply the prompt.

use campusrank_llm::{LLMClient, LLMRequest};
use std::sync::Arc;

use crate::error::{Result, RuntimeError};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Target summary length, in tokens, when none is configured
pub const DEFAULT_SUMMARY_LENGTH: u32 = 100;

const TEMPERATURE: f32 = 0.7;

/// Prompt-in, text-out wrapper around an [`LLMClient`]
#[derive(Clone)]
pub struct TextGenerator {
    client: Arc<dyn LLMClient>,
    model: String,
    max_tokens: u32,
}

impl TextGenerator {
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: max_tokens_for(DEFAULT_SUMMARY_LENGTH),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Size responses for a summary of roughly `summary_length` tokens
    pub fn with_summary_length(mut self, summary_length: u32) -> Self {
        self.max_tokens = max_tokens_for(summary_length);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Generate text for a prompt
    ///
    /// An empty completion is reported as a malformed response.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = LLMRequest::new(prompt.to_string(), self.model.clone())
            .with_max_tokens(self.max_tokens)
            .with_temperature(TEMPERATURE)
            .with_n(1);

        let response = self.client.call(request).await?;
        if response.is_truncated() {
            tracing::debug!(
                model = %response.model,
                tokens_used = response.tokens_used,
                "Completion hit the token limit"
            );
        }
        let content = response.content.trim();
        if content.is_empty() {
            return Err(RuntimeError::MalformedResponse(
                "empty completion".to_string(),
            ));
        }
        Ok(content.to_string())
    }
}

/// Half again the summary length, truncated
fn max_tokens_for(summary_length: u32) -> u32 {
    summary_length.saturating_mul(3) / 2
}
