//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use campusrank_sdk::RankingEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(engine: Arc<RankingEngine>) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/health", get(health))
        .route(
            "/v1/ranking-types",
            get(list_ranking_types).put(save_ranking_types),
        )
        .route("/v1/ranking-types/:name", get(get_ranking_type))
        .route("/v1/rankings", post(rank))
        .route("/v1/rankings/batch", post(rank_batch))
        .route("/v1/score", post(score))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
