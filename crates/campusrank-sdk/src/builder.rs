//! Builder pattern for RankingEngine

use campusrank_llm::{LLMClient, OpenAIProvider};
use campusrank_repository::{
    FileSystemRepository, InMemoryRepository, RankingTypeRegistry, WritableRankingTypeRepository,
};
use campusrank_runtime::{
    CollegeScorecardSource, DiscoverySource, MetricsSource, TavilyDiscovery, TextGenerator,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{EngineConfig, LLMConfig};
use crate::engine::RankingEngine;
use crate::error::{Result, SdkError};

/// Builder for RankingEngine
///
/// # Example
///
/// ```rust,ignore
/// use campusrank_sdk::{LLMConfig, RankingEngineBuilder};
///
/// let engine = RankingEngineBuilder::new()
///     .with_ranking_types_file("config/ranking_types.yaml")
///     .with_scorecard_key(scorecard_key)
///     .with_discovery_key(tavily_key)
///     .with_llm(LLMConfig::new(openai_key))
///     .build()
///     .await?;
/// ```
///
/// Collaborators can be replaced outright, which is how tests run the engine
/// without network access.
pub struct RankingEngineBuilder {
    config: EngineConfig,
    repository: Option<Arc<dyn WritableRankingTypeRepository>>,
    discovery: Option<Arc<dyn DiscoverySource>>,
    metrics: Option<Arc<dyn MetricsSource>>,
    llm_client: Option<Arc<dyn LLMClient>>,
}

impl RankingEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            repository: None,
            discovery: None,
            metrics: None,
            llm_client: None,
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load ranking types from a YAML file
    pub fn with_ranking_types_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ranking_types_file = Some(path.into());
        self
    }

    pub fn with_scorecard_key(mut self, key: impl Into<String>) -> Self {
        self.config.scorecard.api_key = Some(key.into());
        self
    }

    pub fn with_discovery_key(mut self, key: impl Into<String>) -> Self {
        self.config.discovery.api_key = Some(key.into());
        self
    }

    pub fn with_llm(mut self, llm: LLMConfig) -> Self {
        self.config.llm = llm;
        self
    }

    pub fn with_summary_length(mut self, summary_length: u32) -> Self {
        self.config.summary_length = summary_length;
        self
    }

    pub fn with_resolve_concurrency(mut self, concurrency: usize) -> Self {
        self.config.resolve_concurrency = concurrency;
        self
    }

    // ========== Collaborator overrides ==========

    /// Use this repository instead of one built from the configuration
    pub fn with_repository(mut self, repository: Arc<dyn WritableRankingTypeRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_discovery_source(mut self, source: Arc<dyn DiscoverySource>) -> Self {
        self.discovery = Some(source);
        self
    }

    pub fn with_metrics_source(mut self, source: Arc<dyn MetricsSource>) -> Self {
        self.metrics = Some(source);
        self
    }

    pub fn with_llm_client(mut self, client: Arc<dyn LLMClient>) -> Self {
        self.llm_client = Some(client);
        self
    }

    /// Build the engine
    ///
    /// Loads the ranking types once. Missing API keys are not an error: the
    /// affected collaborator reports itself unconfigured and the pipeline
    /// degrades around it.
    pub async fn build(self) -> Result<RankingEngine> {
        let config = self.config;
        if config.resolve_concurrency == 0 {
            return Err(SdkError::ConfigError(
                "resolve_concurrency must be at least 1".to_string(),
            ));
        }
        let timeout = config.request_timeout();

        let repository: Arc<dyn WritableRankingTypeRepository> = match self.repository {
            Some(repository) => repository,
            None => match &config.ranking_types_file {
                Some(path) => Arc::new(FileSystemRepository::new(path)?),
                None => Arc::new(InMemoryRepository::with_defaults()),
            },
        };
        let registry = RankingTypeRegistry::new(repository.load_ranking_types().await?);
        tracing::info!(ranking_types = registry.len(), "Loaded ranking types");

        let discovery: Arc<dyn DiscoverySource> = match self.discovery {
            Some(source) => source,
            None => {
                let key = config.discovery.api_key.clone();
                let source = match &config.discovery.base_url {
                    Some(url) => TavilyDiscovery::with_base_url(key, url.clone()),
                    None => TavilyDiscovery::new(key),
                };
                Arc::new(source.with_timeout(timeout))
            }
        };

        let metrics: Arc<dyn MetricsSource> = match self.metrics {
            Some(source) => source,
            None => {
                let key = config.scorecard.api_key.clone();
                let source = match &config.scorecard.base_url {
                    Some(url) => CollegeScorecardSource::with_base_url(key, url.clone()),
                    None => CollegeScorecardSource::new(key),
                };
                Arc::new(source.with_timeout(timeout))
            }
        };

        let llm_client: Arc<dyn LLMClient> = match self.llm_client {
            Some(client) => client,
            None => {
                let key = config.llm.api_key.clone().unwrap_or_default();
                let provider = match &config.llm.base_url {
                    Some(url) => OpenAIProvider::with_base_url(key, url.clone()),
                    None => OpenAIProvider::new(key),
                };
                Arc::new(provider.with_timeout(timeout))
            }
        };
        let generator = TextGenerator::new(llm_client)
            .with_model(config.llm.model.clone())
            .with_summary_length(config.summary_length);

        let engine = RankingEngine::new(registry, repository, discovery, metrics, generator, config);
        let status = engine.credential_status();
        if !status.all_configured() {
            tracing::warn!(
                scorecard = status.scorecard,
                discovery = status.discovery,
                openai = status.openai,
                "Some API keys are not set; rankings will degrade"
            );
        }
        Ok(engine)
    }
}

impl Default for RankingEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_with_defaults() {
        let engine = RankingEngineBuilder::new().build().await.unwrap();
        let names: Vec<String> = engine
            .ranking_types()
            .await
            .into_iter()
            .map(|rt| rt.name)
            .collect();
        assert_eq!(names, vec!["Overall", "Affordability", "Online Programs"]);

        let status = engine.credential_status();
        assert!(!status.scorecard);
        assert!(!status.discovery);
        assert!(!status.openai);
    }

    #[tokio::test]
    async fn test_keys_mark_collaborators_configured() {
        let engine = RankingEngineBuilder::new()
            .with_scorecard_key("sc")
            .with_discovery_key("tvly")
            .with_llm(LLMConfig::new("sk"))
            .build()
            .await
            .unwrap();
        assert!(engine.credential_status().all_configured());
    }

    #[tokio::test]
    async fn test_zero_concurrency_rejected() {
        let result = RankingEngineBuilder::new()
            .with_resolve_concurrency(0)
            .build()
            .await;
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }
}
