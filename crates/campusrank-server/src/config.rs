//! Server configuration

use campusrank_sdk::{ApiConfig, EngineConfig, LLMConfig, DEFAULT_REQUEST_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// API keys for the external collaborators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeys {
    /// College Scorecard
    #[serde(default)]
    pub scorecard: Option<String>,

    /// Tavily search
    #[serde(default)]
    pub discovery: Option<String>,

    /// OpenAI
    #[serde(default)]
    pub openai: Option<String>,
}

/// Base URL overrides, mainly for proxies and tests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseUrls {
    #[serde(default)]
    pub scorecard: Option<String>,

    #[serde(default)]
    pub discovery: Option<String>,

    #[serde(default)]
    pub openai: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (HTTP)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level for the campusrank crates
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,

    /// Ranking types YAML file
    #[serde(default = "default_ranking_types_path")]
    pub ranking_types_path: PathBuf,

    #[serde(default)]
    pub api_keys: ApiKeys,

    #[serde(default)]
    pub base_urls: BaseUrls,

    /// Text generation model
    #[serde(default = "default_llm_model")]
    pub llm_model: String,

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

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ranking_types_path() -> PathBuf {
    PathBuf::from("config/ranking_types.yaml")
}

fn default_llm_model() -> String {
    EngineConfig::default().llm.model
}

fn default_summary_length() -> u32 {
    EngineConfig::default().summary_length
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_resolve_concurrency() -> usize {
    1
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            json_logs: false,
            ranking_types_path: default_ranking_types_path(),
            api_keys: ApiKeys::default(),
            base_urls: BaseUrls::default(),
            llm_model: default_llm_model(),
            summary_length: default_summary_length(),
            request_timeout_secs: default_request_timeout_secs(),
            resolve_concurrency: default_resolve_concurrency(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Sources, later ones winning: `config/server.{yaml,toml,json}` (optional),
    /// then `CAMPUSRANK_*` variables with `__` separating nested keys, e.g.
    /// `CAMPUSRANK_API_KEYS__OPENAI`. A `.env` file is read first when present.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from("config/server")
    }

    /// Load with an explicit config file stem
    pub fn load_from(file_stem: &str) -> anyhow::Result<Self> {
        let config_result = config::Config::builder()
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix("CAMPUSRANK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::info!("No usable config source ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Address to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directives derived from `log_level`
    pub fn log_directives(&self) -> String {
        format!(
            "campusrank_server={0},campusrank_sdk={0},campusrank_runtime={0},tower_http=debug",
            self.log_level
        )
    }

    /// Engine configuration for the SDK
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            ranking_types_file: Some(self.ranking_types_path.clone()),
            scorecard: ApiConfig {
                api_key: self.api_keys.scorecard.clone(),
                base_url: self.base_urls.scorecard.clone(),
            },
            discovery: ApiConfig {
                api_key: self.api_keys.discovery.clone(),
                base_url: self.base_urls.discovery.clone(),
            },
            llm: LLMConfig {
                api_key: self.api_keys.openai.clone(),
                base_url: self.base_urls.openai.clone(),
                model: self.llm_model.clone(),
            },
            summary_length: self.summary_length,
            request_timeout_secs: self.request_timeout_secs,
            resolve_concurrency: self.resolve_concurrency,
        }
    }
}
