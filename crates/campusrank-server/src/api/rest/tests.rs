//! Tests for REST API types

#![cfg(test)]

use super::types::*;
use campusrank_sdk::{
    CollegeProfile, RankedEntry, RankingDocument, RankingResponse, RankingResult, ScoredCollege,
};

#[test]
fn test_criteria_payload_list() {
    let payload: RankingTypePayload = serde_json::from_value(serde_json::json!({
        "name": "Value",
        "criteria": ["Median Earnings", "Median Debt"]
    }))
    .unwrap();

    assert!(matches!(payload.criteria, CriteriaPayload::List(_)));
    let rt = payload.into_ranking_type().unwrap();
    assert_eq!(rt.criteria, vec!["Median Earnings", "Median Debt"]);
}

#[test]
fn test_criteria_payload_comma_text() {
    let payload: RankingTypePayload = serde_json::from_value(serde_json::json!({
        "name": "Value",
        "criteria": " Median Earnings ,, Median Debt "
    }))
    .unwrap();

    assert!(matches!(payload.criteria, CriteriaPayload::Text(_)));
    let rt = payload.into_ranking_type().unwrap();
    assert_eq!(rt.criteria, vec!["Median Earnings", "Median Debt"]);
}

#[test]
fn test_criteria_payload_rejects_empty() {
    let payload: RankingTypePayload = serde_json::from_value(serde_json::json!({
        "name": "Empty",
        "criteria": " , "
    }))
    .unwrap();
    assert!(payload.into_ranking_type().is_err());

    let payload: RankingTypePayload = serde_json::from_value(serde_json::json!({
        "name": "",
        "criteria": ["Median Debt"]
    }))
    .unwrap();
    assert!(payload.into_ranking_type().is_err());
}

#[test]
fn test_ranking_response_payload_flattens() {
    let response = RankingResponse {
        request_id: "req_20240101000000_000001".to_string(),
        title: "Top 1 Overall Colleges in Law".to_string(),
        category: "Law".to_string(),
        ranking_type: "Overall".to_string(),
        result: RankingResult::new(vec![ScoredCollege::new(
            CollegeProfile::new("Alpha University"),
            50.0,
        )]),
        document: RankingDocument {
            introduction: "Intro.".to_string(),
            methodology: "Method.".to_string(),
            heading: "Overall Colleges in Law".to_string(),
            entries: vec![RankedEntry {
                rank: 1,
                name: "Alpha University".to_string(),
                score: 50.0,
                summary: "Summary.".to_string(),
                statistics: Vec::new(),
            }],
            conclusion: "Done.".to_string(),
        },
        processing_time_ms: 3,
    };

    let json = serde_json::to_value(RankingResponsePayload::from(response)).unwrap();
    assert_eq!(json["request_id"], "req_20240101000000_000001");
    assert_eq!(json["category"], "Law");
    assert!(json["content_html"]
        .as_str()
        .unwrap()
        .contains("<h3>1. Alpha University</h3>"));
}

#[test]
fn test_batch_item_skips_empty_fields() {
    let item = BatchItemPayload {
        status: 400,
        ranking: None,
        error: Some("Unknown ranking type: Nope".to_string()),
    };
    let json = serde_json::to_value(item).unwrap();
    assert_eq!(json["status"], 400);
    assert!(json.get("ranking").is_none());
}
