//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use campusrank_core::CollegeProfile;
use campusrank_llm::{LLMError, MockProvider};
use campusrank_runtime::{
    DiscoveryQuery, DiscoverySource, MetricsSource, Result as RuntimeResult, RuntimeError,
};
use campusrank_sdk::{RankingEngine, RankingEngineBuilder};
use std::collections::HashMap;
use std::sync::Arc;

/// Discovery source returning fixed titles
pub struct FixedDiscovery(pub Vec<String>);

impl FixedDiscovery {
    pub fn new(titles: &[&str]) -> Self {
        Self(titles.iter().map(|t| t.to_string()).collect())
    }
}

#[async_trait]
impl DiscoverySource for FixedDiscovery {
    async fn search(&self, _query: &DiscoveryQuery) -> RuntimeResult<Vec<String>> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Metrics source serving profiles from a map; unknown names are not found
#[derive(Default)]
pub struct FixedMetrics(pub HashMap<String, CollegeProfile>);

impl FixedMetrics {
    pub fn with(mut self, profile: CollegeProfile) -> Self {
        self.0.insert(profile.name.clone(), profile);
        self
    }
}

#[async_trait]
impl MetricsSource for FixedMetrics {
    async fn lookup(&self, name: &str) -> RuntimeResult<Option<CollegeProfile>> {
        Ok(self.0.get(name).cloned())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Metrics source whose every lookup fails
pub struct DownMetrics;

#[async_trait]
impl MetricsSource for DownMetrics {
    async fn lookup(&self, _name: &str) -> RuntimeResult<Option<CollegeProfile>> {
        Err(RuntimeError::TransportFailure("timed out".to_string()))
    }

    fn name(&self) -> &str {
        "down"
    }
}

/// LLM that answers estimate prompts from a table and fails everything else
pub fn estimates_only(table: &[(&str, &str)]) -> MockProvider {
    let table: Vec<(String, String)> = table
        .iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect();
    MockProvider::with_handler(move |req| {
        if !req.prompt.starts_with("Provide the following information for") {
            return Err(LLMError::ApiCallFailed("prose disabled".to_string()));
        }
        table
            .iter()
            .find(|(name, _)| req.prompt.contains(&format!("for {} in the context", name)))
            .map(|(_, text)| text.clone())
            .ok_or_else(|| LLMError::ApiCallFailed("no estimate scripted".to_string()))
    })
}

/// Engine wired to in-process collaborators with the default ranking types
pub async fn engine(
    discovery: impl DiscoverySource + 'static,
    metrics: impl MetricsSource + 'static,
    llm: MockProvider,
) -> RankingEngine {
    RankingEngineBuilder::new()
        .with_discovery_source(Arc::new(discovery))
        .with_metrics_source(Arc::new(metrics))
        .with_llm_client(Arc::new(llm))
        .build()
        .await
        .expect("engine should build")
}
