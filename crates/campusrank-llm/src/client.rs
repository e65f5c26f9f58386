//! Text generation client interface

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One completion request
///
/// Sampling parameters left unset are omitted from the wire request, so the
/// backend's own defaults apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMRequest {
    pub prompt: String,

    /// Model identifier, e.g. `gpt-4o-mini`
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Completions to request; only the first is read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
}

impl LLMRequest {
    pub fn new(prompt: String, model: String) -> Self {
        Self {
            prompt,
            model,
            max_tokens: None,
            temperature: None,
            n: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }
}

/// Generated text plus the bookkeeping the backend reported
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// Generated text, trimmed
    pub content: String,
    pub model: String,
    pub tokens_used: u32,
    /// e.g. `stop` or `length`
    pub finish_reason: String,
}

impl LLMResponse {
    pub fn new(content: String, model: String) -> Self {
        Self {
            content,
            model,
            tokens_used: 0,
            finish_reason: "stop".to_string(),
        }
    }

    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens_used = tokens;
        self
    }

    pub fn with_finish_reason(mut self, reason: String) -> Self {
        self.finish_reason = reason;
        self
    }

    /// Whether generation stopped at the token limit
    pub fn is_truncated(&self) -> bool {
        self.finish_reason == "length"
    }
}

/// A text generation backend
#[async_trait]
pub trait LLMClient: Send + Sync {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse>;

    /// Whether the client has the credentials it needs to make calls
    fn is_configured(&self) -> bool {
        true
    }

    fn name(&self) -> &str;
}
