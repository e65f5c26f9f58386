//! RankingEngine - Main API for generating rankings

use campusrank_core::{CollegeProfile, RankRequest, RankingResult, RankingType};
use campusrank_repository::{RankingTypeRegistry, WritableRankingTypeRepository};
use campusrank_runtime::{
    DiscoverySource, EntityResolver, MetricsSource, ScoreBreakdown, ScoreCalculator,
    TextGenerator,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::pipeline::RankingPipeline;
use crate::renderer::{ContentRenderer, RankingDocument};

/// Output of one ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    /// Format: `req_YYYYMMDDHHmmss_xxxxxx`
    pub request_id: String,
    pub title: String,
    pub category: String,
    pub ranking_type: String,
    pub result: RankingResult,
    pub document: RankingDocument,
    pub processing_time_ms: u64,
}

/// Which collaborators have credentials configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialStatus {
    pub scorecard: bool,
    pub discovery: bool,
    pub openai: bool,
}

impl CredentialStatus {
    pub fn all_configured(&self) -> bool {
        self.scorecard && self.discovery && self.openai
    }
}

/// Generates college rankings
///
/// The engine holds a snapshot of the stored ranking types. Each run reads the
/// snapshot current at its start; [`RankingEngine::save_ranking_types`]
/// replaces it for later runs.
pub struct RankingEngine {
    registry: RwLock<Arc<RankingTypeRegistry>>,
    repository: Arc<dyn WritableRankingTypeRepository>,
    discovery: Arc<dyn DiscoverySource>,
    metrics: Arc<dyn MetricsSource>,
    generator: TextGenerator,
    config: EngineConfig,
}

impl RankingEngine {
    /// Generate a unique request ID
    /// Format: req_YYYYMMDDHHmmss_xxxxxx
    fn generate_request_id() -> String {
        use chrono::Utc;
        use rand::Rng;

        let datetime_str = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);

        format!("req_{}_{:06x}", datetime_str, random)
    }

    pub(crate) fn new(
        registry: RankingTypeRegistry,
        repository: Arc<dyn WritableRankingTypeRepository>,
        discovery: Arc<dyn DiscoverySource>,
        metrics: Arc<dyn MetricsSource>,
        generator: TextGenerator,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry: RwLock::new(Arc::new(registry)),
            repository,
            discovery,
            metrics,
            generator,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current ranking type snapshot
    pub async fn registry(&self) -> Arc<RankingTypeRegistry> {
        self.registry.read().await.clone()
    }

    /// Validate, resolve, rank and render one request
    pub async fn rank(&self, request: RankRequest) -> Result<RankingResponse> {
        let start = Instant::now();
        let request_id = Self::generate_request_id();

        request.validate()?;
        let registry = self.registry().await;
        if !registry.contains(&request.ranking_type) {
            return Err(SdkError::UnknownRankingType(request.ranking_type));
        }

        tracing::info!(
            request_id = %request_id,
            category = %request.category,
            ranking_type = %request.ranking_type,
            num_entities = request.num_entities,
            "Ranking request received"
        );

        let result = self.pipeline(registry.clone()).run(&request).await;
        if result.is_empty() {
            tracing::warn!(request_id = %request_id, category = %request.category, "No ranking could be generated");
            return Err(SdkError::NoRankingProduced {
                category: request.category,
            });
        }

        let document = ContentRenderer::new(self.generator.clone(), registry)
            .render(
                &result,
                &request.category,
                &request.ranking_type,
                request.custom_methodology(),
            )
            .await;

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            request_id = %request_id,
            colleges = result.len(),
            processing_time_ms,
            "Ranking generated"
        );

        Ok(RankingResponse {
            request_id,
            title: request.title(),
            category: request.category,
            ranking_type: request.ranking_type,
            result,
            document,
            processing_time_ms,
        })
    }

    /// Run several requests one after another
    ///
    /// Each request succeeds or fails on its own; results are returned in
    /// request order.
    pub async fn run_batch(&self, requests: Vec<RankRequest>) -> Vec<Result<RankingResponse>> {
        tracing::info!(count = requests.len(), "Starting batch ranking");
        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            let category = request.category.clone();
            let response = self.rank(request).await;
            if let Err(e) = &response {
                tracing::warn!(category = %category, error = %e, "Batch item failed");
            }
            responses.push(response);
        }
        responses
    }

    /// Score a caller-supplied profile with its per-criterion breakdown
    pub async fn score_profile(
        &self,
        profile: &CollegeProfile,
        ranking_type: &str,
    ) -> Result<ScoreBreakdown> {
        ScoreCalculator::new(self.registry().await)
            .breakdown(profile, ranking_type)
            .ok_or_else(|| SdkError::UnknownRankingType(ranking_type.to_string()))
    }

    /// Ranking types in the current snapshot
    pub async fn ranking_types(&self) -> Vec<RankingType> {
        self.registry().await.all()
    }

    /// Look up one ranking type by exact name
    pub async fn ranking_type(&self, name: &str) -> Result<RankingType> {
        self.registry()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| SdkError::UnknownRankingType(name.to_string()))
    }

    /// Replace the stored ranking types and swap in a fresh snapshot
    ///
    /// Nothing is stored when any entry is invalid.
    pub async fn save_ranking_types(&self, ranking_types: Vec<RankingType>) -> Result<Vec<RankingType>> {
        self.repository.save_ranking_types(&ranking_types).await?;
        let stored = self.repository.load_ranking_types().await?;
        let registry = Arc::new(RankingTypeRegistry::new(stored));

        *self.registry.write().await = registry.clone();
        tracing::info!(count = registry.len(), "Ranking types replaced");
        Ok(registry.all())
    }

    /// Which collaborators have credentials
    pub fn credential_status(&self) -> CredentialStatus {
        CredentialStatus {
            scorecard: self.metrics.is_configured(),
            discovery: self.discovery.is_configured(),
            openai: self.generator.is_configured(),
        }
    }

    fn pipeline(&self, registry: Arc<RankingTypeRegistry>) -> RankingPipeline {
        let resolver = EntityResolver::new(
            self.discovery.clone(),
            self.metrics.clone(),
            self.generator.clone(),
            ScoreCalculator::new(registry),
        )
        .with_concurrency(self.config.resolve_concurrency);
        RankingPipeline::new(resolver)
    }
}
