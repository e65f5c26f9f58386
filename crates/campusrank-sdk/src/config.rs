//! Configuration types for RankingEngine

use campusrank_runtime::{DEFAULT_MODEL, DEFAULT_SUMMARY_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default timeout for every outbound HTTP call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ranking types YAML file; the built-in defaults are used when unset
    #[serde(default)]
    pub ranking_types_file: Option<PathBuf>,

    /// College Scorecard access
    #[serde(default)]
    pub scorecard: ApiConfig,

    /// Tavily search access
    #[serde(default)]
    pub discovery: ApiConfig,

    /// Text generation settings
    #[serde(default)]
    pub llm: LLMConfig,

    /// Target length of generated summaries, in tokens
    #[serde(default = "default_summary_length")]
    pub summary_length: u32,

    /// Timeout for each outbound HTTP call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How many candidates to resolve at once
    #[serde(default = "default_resolve_concurrency")]
    pub resolve_concurrency: usize,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            ranking_types_file: None,
            scorecard: ApiConfig::default(),
            discovery: ApiConfig::default(),
            llm: LLMConfig::default(),
            summary_length: default_summary_length(),
            request_timeout_secs: default_request_timeout_secs(),
            resolve_concurrency: default_resolve_concurrency(),
        }
    }

    /// Set the ranking types file
    pub fn with_ranking_types_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ranking_types_file = Some(path.into());
        self
    }

    /// Set the College Scorecard API key
    pub fn with_scorecard_key(mut self, key: impl Into<String>) -> Self {
        self.scorecard.api_key = Some(key.into());
        self
    }

    /// Set the Tavily API key
    pub fn with_discovery_key(mut self, key: impl Into<String>) -> Self {
        self.discovery.api_key = Some(key.into());
        self
    }

    /// Set the text generation configuration
    pub fn with_llm(mut self, llm: LLMConfig) -> Self {
        self.llm = llm;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Credentials and endpoint for an HTTP data source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key; blank counts as unset
    #[serde(default)]
    pub api_key: Option<String>,

    /// Override for the service's base URL
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Text generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    /// OpenAI API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Override for an OpenAI-compatible base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
}

impl LLMConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
        }
    }
}

fn default_summary_length() -> u32 {
    DEFAULT_SUMMARY_LENGTH
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_resolve_concurrency() -> usize {
    1
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
