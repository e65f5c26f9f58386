//! Tavily search discovery source

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::{DiscoveryQuery, DiscoverySource};
use crate::error::{Result, RuntimeError};

const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    title: Option<String>,
}

/// Discovery backed by the Tavily search API
pub struct TavilyDiscovery {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TavilyDiscovery {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });
        self
    }
}

#[async_trait]
impl DiscoverySource for TavilyDiscovery {
    async fn search(&self, query: &DiscoveryQuery) -> Result<Vec<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| RuntimeError::CredentialMissing("Tavily".to_string()))?;

        tracing::debug!(query = %query.query, max_results = query.max_results, "Searching Tavily");

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("Content-Type", "application/json")
            .header("X-API-Key", api_key)
            .json(&json!({
                "query": query.query,
                "include_domains": query.include_domains,
                "max_results": query.max_results,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RuntimeError::TransportFailure(format!(
                "Tavily returned status {}",
                status
            )));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(parsed
            .results
            .into_iter()
            .filter_map(|result| result.title)
            .collect())
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn name(&self) -> &str {
        "tavily"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let source = TavilyDiscovery::new(Some("   ".to_string()));
        assert!(!source.is_configured());

        let query = DiscoveryQuery {
            query: "top 5 colleges for nursing in the United States".to_string(),
            include_domains: vec!["edu".to_string()],
            max_results: 10,
        };
        let err = source.search(&query).await.unwrap_err();
        assert!(matches!(err, RuntimeError::CredentialMissing(_)));
    }
}
