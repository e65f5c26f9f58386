//! API endpoint handlers

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, State},
    Json,
};
use campusrank_sdk::{RankRequest, RankingType, ScoreBreakdown};
use tracing::{info, warn};

/// Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ranking_types: state.engine.ranking_types().await.len(),
        credentials: state.engine.credential_status(),
    })
}

/// List ranking types
pub(super) async fn list_ranking_types(
    State(state): State<AppState>,
) -> Json<RankingTypesResponse> {
    Json(RankingTypesResponse {
        ranking_types: state.engine.ranking_types().await,
    })
}

/// Get one ranking type by exact name
pub(super) async fn get_ranking_type(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RankingType>, ServerError> {
    state
        .engine
        .ranking_type(&name)
        .await
        .map(Json)
        .map_err(|_| ServerError::NotFound(format!("Ranking type '{}' not found", name)))
}

/// Replace all ranking types
pub(super) async fn save_ranking_types(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<SaveRankingTypesRequest>,
) -> Result<Json<RankingTypesResponse>, ServerError> {
    let ranking_types = payload
        .ranking_types
        .into_iter()
        .map(RankingTypePayload::into_ranking_type)
        .collect::<campusrank_core::Result<Vec<_>>>()
        .map_err(|e| ServerError::InvalidRequest(e.to_string()))?;

    info!("Saving {} ranking types", ranking_types.len());
    let saved = state.engine.save_ranking_types(ranking_types).await?;
    Ok(Json(RankingTypesResponse {
        ranking_types: saved,
    }))
}

/// Generate one ranking
#[axum::debug_handler]
pub(super) async fn rank(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<RankRequest>,
) -> Result<Json<RankingResponsePayload>, ServerError> {
    info!(
        "Received ranking request: category={}, ranking_type={}, num_entities={}",
        request.category, request.ranking_type, request.num_entities
    );

    let response = state.engine.rank(request).await?;
    Ok(Json(response.into()))
}

/// Generate several rankings; items fail independently
pub(super) async fn rank_batch(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<BatchRequestPayload>,
) -> Result<Json<BatchResponsePayload>, ServerError> {
    if payload.requests.is_empty() {
        return Err(ServerError::InvalidRequest(
            "requests must not be empty".to_string(),
        ));
    }

    let outcomes = state.engine.run_batch(payload.requests).await;
    let results: Vec<BatchItemPayload> = outcomes
        .into_iter()
        .map(|outcome| match outcome {
            Ok(response) => BatchItemPayload {
                status: 200,
                ranking: Some(response.into()),
                error: None,
            },
            Err(e) => {
                let err = ServerError::from(e);
                warn!("Batch item failed: {}", err);
                BatchItemPayload {
                    status: err.status_code().as_u16(),
                    ranking: None,
                    error: Some(err.message().to_string()),
                }
            }
        })
        .collect();

    let succeeded = results.iter().filter(|item| item.ranking.is_some()).count();
    Ok(Json(BatchResponsePayload {
        succeeded,
        failed: results.len() - succeeded,
        results,
    }))
}

/// Score a caller-supplied profile
pub(super) async fn score(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<ScoreRequestPayload>,
) -> Result<Json<ScoreBreakdown>, ServerError> {
    let breakdown = state
        .engine
        .score_profile(&payload.profile, &payload.ranking_type)
        .await?;
    Ok(Json(breakdown))
}
