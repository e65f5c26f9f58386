//! REST API type definitions

use campusrank_sdk::{
    CollegeProfile, CredentialStatus, RankRequest, RankingEngine, RankingResponse, RankingType,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RankingEngine>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of configured ranking types
    pub ranking_types: usize,
    pub credentials: CredentialStatus,
}

/// Criteria as either a list or a comma-separated string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CriteriaPayload {
    List(Vec<String>),
    Text(String),
}

/// One ranking type in a save request
#[derive(Debug, Clone, Deserialize)]
pub struct RankingTypePayload {
    pub name: String,
    pub criteria: CriteriaPayload,
}

impl RankingTypePayload {
    /// Validate and convert into a [`RankingType`]
    pub fn into_ranking_type(self) -> campusrank_core::Result<RankingType> {
        match self.criteria {
            CriteriaPayload::List(criteria) => RankingType::new(self.name, criteria),
            CriteriaPayload::Text(text) => RankingType::from_comma_separated(self.name, &text),
        }
    }
}

/// Replace-all request for ranking types
#[derive(Debug, Deserialize)]
pub struct SaveRankingTypesRequest {
    pub ranking_types: Vec<RankingTypePayload>,
}

/// Ranking type listing
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingTypesResponse {
    pub ranking_types: Vec<RankingType>,
}

/// Ranking response with the rendered article
#[derive(Debug, Serialize)]
pub struct RankingResponsePayload {
    #[serde(flatten)]
    pub response: RankingResponse,
    pub content_html: String,
}

impl From<RankingResponse> for RankingResponsePayload {
    fn from(response: RankingResponse) -> Self {
        let content_html = response.document.to_html();
        Self {
            response,
            content_html,
        }
    }
}

/// Batch ranking request
#[derive(Debug, Deserialize)]
pub struct BatchRequestPayload {
    pub requests: Vec<RankRequest>,
}

/// Outcome of one batch item
#[derive(Debug, Serialize)]
pub struct BatchItemPayload {
    /// HTTP status the item would have had on its own
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<RankingResponsePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch ranking response
#[derive(Debug, Serialize)]
pub struct BatchResponsePayload {
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<BatchItemPayload>,
}

/// Score a caller-supplied profile
#[derive(Debug, Deserialize)]
pub struct ScoreRequestPayload {
    pub profile: CollegeProfile,
    pub ranking_type: String,
}
