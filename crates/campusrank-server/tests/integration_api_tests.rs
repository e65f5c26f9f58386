//! Integration tests for REST API endpoints
//!
//! These tests build a real RankingEngine over in-process data sources and
//! drive the router end-to-end.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use campusrank_core::{CollegeProfile, MetricKey};
use campusrank_llm::MockProvider;
use campusrank_runtime::{DiscoveryQuery, DiscoverySource, MetricsSource, Result as RuntimeResult};
use campusrank_sdk::RankingEngineBuilder;
use campusrank_server::api::create_router;
use campusrank_server::config::ServerConfig;
use campusrank_server::engine::init_engine;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

struct StaticDiscovery(Vec<String>);

#[async_trait]
impl DiscoverySource for StaticDiscovery {
    async fn search(&self, _query: &DiscoveryQuery) -> RuntimeResult<Vec<String>> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

struct StaticMetrics(HashMap<String, CollegeProfile>);

#[async_trait]
impl MetricsSource for StaticMetrics {
    async fn lookup(&self, name: &str) -> RuntimeResult<Option<CollegeProfile>> {
        Ok(self.0.get(name).cloned())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Router over two known colleges, a non-institution title and one college with no data
async fn create_test_app() -> Router {
    let profiles = [
        CollegeProfile::new("Alpha University")
            .with_metric(MetricKey::GraduationRate, 60.0)
            .with_metric(MetricKey::MedianDebt, 20_000.0),
        CollegeProfile::new("Beta & Sons College").with_metric(MetricKey::GraduationRate, 90.0),
    ];
    let metrics = StaticMetrics(
        profiles
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect(),
    );
    let discovery = StaticDiscovery(vec![
        "Alpha University".to_string(),
        "Best Schools Guide".to_string(),
        "Beta & Sons College".to_string(),
        "Gamma University".to_string(),
    ]);

    let engine = RankingEngineBuilder::new()
        .with_discovery_source(Arc::new(discovery))
        .with_metrics_source(Arc::new(metrics))
        .with_llm_client(Arc::new(MockProvider::failing()))
        .build()
        .await
        .unwrap();

    create_router(Arc::new(engine))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// ============================================================================
// Health and ranking types
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await;
    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["ranking_types"], 3);
    // Stub sources report themselves configured
    assert_eq!(json["credentials"]["discovery"], true);
}

#[tokio::test]
async fn test_list_and_get_ranking_types() {
    let app = create_test_app().await;

    let (status, json) = send(&app, "GET", "/v1/ranking-types", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json["ranking_types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|rt| rt["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Overall", "Affordability", "Online Programs"]);

    let (status, json) = send(&app, "GET", "/v1/ranking-types/Overall", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["criteria"][2], "Graduation Rate");

    let (status, json) = send(&app, "GET", "/v1/ranking-types/Nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_save_ranking_types_replaces_all() {
    let app = create_test_app().await;

    let body = json!({
        "ranking_types": [
            {"name": "Low Debt", "criteria": "Median Debt, Graduation Rate"},
            {"name": "Outcomes", "criteria": ["Graduation Rate"]}
        ]
    });
    let (status, json) = send(&app, "PUT", "/v1/ranking-types", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ranking_types"].as_array().unwrap().len(), 2);
    assert_eq!(json["ranking_types"][0]["criteria"][0], "Median Debt");

    let (status, _) = send(&app, "GET", "/v1/ranking-types/Overall", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_invalid_ranking_type_is_rejected() {
    let app = create_test_app().await;

    let body = json!({"ranking_types": [{"name": "Empty", "criteria": " , "}]});
    let (status, json) = send(&app, "PUT", "/v1/ranking-types", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);

    let (_, json) = send(&app, "GET", "/v1/ranking-types", None).await;
    assert_eq!(json["ranking_types"].as_array().unwrap().len(), 3);
}

// ============================================================================
// Rankings
// ============================================================================

#[tokio::test]
async fn test_rank_endpoint() {
    let app = create_test_app().await;

    let body = json!({"category": "Nursing", "ranking_type": "Overall", "num_entities": 3});
    let (status, json) = send(&app, "POST", "/v1/rankings", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["request_id"].as_str().unwrap().starts_with("req_"));
    assert_eq!(json["title"], "Top 3 Overall Colleges in Nursing");

    // The guide title is filtered, Gamma has no data anywhere
    let colleges = json["result"]["colleges"].as_array().unwrap();
    let names: Vec<&str> = colleges.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Beta & Sons College", "Alpha University"]);
    assert!((colleges[0]["score"].as_f64().unwrap() - 22.5).abs() < 1e-9);

    let html = json["content_html"].as_str().unwrap();
    assert!(html.contains("<h3>1. Beta &amp; Sons College</h3>"));
    assert!(html.contains("<li><strong>Graduation Rate:</strong> 90.0%</li>"));
}

#[tokio::test]
async fn test_rank_unknown_type_is_bad_request() {
    let app = create_test_app().await;

    let body = json!({"category": "Nursing", "ranking_type": "Nope", "num_entities": 3});
    let (status, json) = send(&app, "POST", "/v1/rankings", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Nope"));
}

#[tokio::test]
async fn test_rank_with_nothing_resolved_is_unprocessable() {
    // The only candidate has no data and estimation is unavailable
    let app = {
        let engine = RankingEngineBuilder::new()
            .with_discovery_source(Arc::new(StaticDiscovery(vec!["Gamma University".to_string()])))
            .with_metrics_source(Arc::new(StaticMetrics(HashMap::new())))
            .with_llm_client(Arc::new(MockProvider::failing()))
            .build()
            .await
            .unwrap();
        create_router(Arc::new(engine))
    };
    let body = json!({"category": "Nursing", "ranking_type": "Overall", "num_entities": 1});
    let (status, json) = send(&app, "POST", "/v1/rankings", Some(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "No ranking could be generated for Nursing");
}

#[tokio::test]
async fn test_rank_invalid_json() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/v1/rankings")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({"category": "Nursing", "ranking_type": "Overall"});
    let (status, json) = send(&app, "POST", "/v1/rankings", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON data"));
}

#[tokio::test]
async fn test_rank_out_of_range_count() {
    let app = create_test_app().await;

    let body = json!({"category": "Nursing", "ranking_type": "Overall", "num_entities": 0});
    let (status, _) = send(&app, "POST", "/v1/rankings", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_endpoint() {
    let app = create_test_app().await;

    let body = json!({
        "requests": [
            {"category": "Nursing", "ranking_type": "Overall", "num_entities": 3},
            {"category": "Law", "ranking_type": "Nope", "num_entities": 3}
        ]
    });
    let (status, json) = send(&app, "POST", "/v1/rankings/batch", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["succeeded"], 1);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["results"][0]["status"], 200);
    assert_eq!(json["results"][0]["ranking"]["category"], "Nursing");
    assert_eq!(json["results"][1]["status"], 400);
    assert!(json["results"][1]["error"].as_str().unwrap().contains("Nope"));

    let (status, _) = send(&app, "POST", "/v1/rankings/batch", Some(json!({"requests": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Scoring
// ============================================================================

#[tokio::test]
async fn test_score_endpoint() {
    let app = create_test_app().await;

    let body = json!({
        "ranking_type": "Overall",
        "profile": {"name": "Example", "admission_rate": 20.0, "median_earnings": 150000.0}
    });
    let (status, json) = send(&app, "POST", "/v1/score", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert!((json["total"].as_f64().unwrap() - 45.0).abs() < 1e-9);
    assert_eq!(json["contributions"].as_array().unwrap().len(), 4);

    let body = json!({"ranking_type": "Nope", "profile": {"name": "Example"}});
    let (status, _) = send(&app, "POST", "/v1/score", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Server configuration
// ============================================================================

#[tokio::test]
async fn test_init_engine_persists_ranking_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranking_types.yaml");
    let config = ServerConfig {
        ranking_types_path: path.clone(),
        ..Default::default()
    };

    let engine = init_engine(&config).await.unwrap();
    assert!(!engine.credential_status().all_configured());
    let app = create_router(Arc::new(engine));

    let (status, json) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ranking_types"], 3);
    assert_eq!(json["credentials"]["openai"], false);

    let body = json!({"ranking_types": [{"name": "Value", "criteria": "Median Earnings"}]});
    let (status, _) = send(&app, "PUT", "/v1/ranking-types", Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("name: Value"));
}
