//! Tests for OpenAIProvider against a mocked chat completions endpoint
//!
//! These tests use mockito to mock HTTP API responses.

use campusrank_llm::{LLMClient, LLMError, LLMRequest, OpenAIProvider};
use mockito::{Matcher, Server};
use serde_json::json;

fn request() -> LLMRequest {
    LLMRequest::new(
        "Write a 150-word introduction".to_string(),
        "gpt-4o-mini".to_string(),
    )
    .with_max_tokens(150)
    .with_temperature(0.7)
    .with_n(1)
}

#[tokio::test]
async fn test_successful_completion() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("Authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 150,
            "n": 1
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [{
                    "message": {"role": "assistant", "content": "  Colleges matter.  "},
                    "finish_reason": "stop"
                }],
                "usage": {"total_tokens": 42}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = OpenAIProvider::with_base_url("sk-test", server.url());
    let response = provider.call(request()).await.expect("call should succeed");

    assert_eq!(response.content, "Colleges matter.");
    assert_eq!(response.tokens_used, 42);
    assert_eq!(response.finish_reason, "stop");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_status() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(r#"{"error": {"message": "rate limited"}}"#)
        .create_async()
        .await;

    let provider = OpenAIProvider::with_base_url("sk-test", server.url());
    let err = provider.call(request()).await.unwrap_err();

    match err {
        LLMError::ApiCallFailed(msg) => assert!(msg.contains("429")),
        other => panic!("Expected ApiCallFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_response_without_content() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let provider = OpenAIProvider::with_base_url("sk-test", server.url());
    let err = provider.call(request()).await.unwrap_err();

    assert!(matches!(err, LLMError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_malformed_json() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let provider = OpenAIProvider::with_base_url("sk-test", server.url());
    let err = provider.call(request()).await.unwrap_err();

    assert!(matches!(err, LLMError::InvalidResponse(_)));
}
