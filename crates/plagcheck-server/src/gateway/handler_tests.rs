//! Router-level tests for the gateway, driven through `tower::ServiceExt::oneshot`.

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use plagcheck::embedding::MockEmbedder;
use plagcheck::extract::ExtractError;
use plagcheck::pipeline::{DetectionError, Detector, DetectorConfig};
use plagcheck::retrieval::{
    CandidateRetriever, MockPrimarySource, MockSecondarySource, RetrieverConfig,
};
use plagcheck::scoring::SimilarityScorer;

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::gateway::{STATUS_HEADER, create_router_with_state};

const TOPICS: [&str; 4] = ["astronomy", "biology", "chemistry", "geology"];

fn sentence_for(topic: &str) -> String {
    format!("Research area {topic} describes important findings about natural phenomena worldwide")
}

fn passage_for(topic: &str) -> String {
    format!(
        "The encyclopedia entry on {topic} summarises decades of peer reviewed work and \
         explains how the field grew out of careful observation of the natural world."
    )
}

fn document() -> String {
    TOPICS
        .iter()
        .map(|t| format!("{}.", sentence_for(t)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Only the first topic has a close source.
fn test_state() -> HandlerState<MockPrimarySource, MockSecondarySource, MockEmbedder> {
    let topic = TOPICS[0];
    let query = format!("Research area {topic} describes important findings about natural");

    let primary = MockPrimarySource::new()
        .with_query_results(&query, &[topic])
        .with_extract(topic, &passage_for(topic), "https://en.wikipedia.org/wiki/Astronomy");
    let embedder = MockEmbedder::new(2)
        .with_vector(&sentence_for(topic), vec![1.0, 0.0])
        .with_vector(&passage_for(topic), vec![0.8, 0.6]);

    let retriever = CandidateRetriever::new(
        primary,
        MockSecondarySource::new(),
        RetrieverConfig::default().with_min_call_interval(Duration::ZERO),
    );

    HandlerState::new(Detector::new(
        retriever,
        SimilarityScorer::new(embedder),
        DetectorConfig::default(),
    )
    .unwrap())
}

fn test_router() -> Router {
    create_router_with_state(test_state())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body should be valid JSON")
}

fn status_header(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(STATUS_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
}

async fn post_text(router: &Router, body: serde_json::Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/check-text")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

async fn post_file(router: &Router, uri: &str, bytes: Vec<u8>) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(bytes))
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

mod check_text_tests {
    use super::*;

    #[tokio::test]
    async fn test_check_text_reports_matches() {
        let router = test_router();
        let response = post_text(&router, serde_json::json!({ "text": document() })).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(status_header(&response), "matches_found");

        let body = body_json(response).await;
        // One of four sentences at 80%: 0.25 * 80 = 20.
        assert_eq!(body["plagiarismScore"], 20.0);
        assert_eq!(body["originalityScore"], 80.0);
        assert_eq!(body["sentencesAnalyzed"], 4);
        assert_eq!(body["sentencesChecked"], 1);
        assert_eq!(body["matches"].as_array().unwrap().len(), 1);
        assert_eq!(body["matches"][0]["sentenceIndex"], 1);
        assert_eq!(body["matches"][0]["similarity"], 80.0);
        assert_eq!(
            body["sources"][0],
            "https://en.wikipedia.org/wiki/Astronomy"
        );
    }

    #[tokio::test]
    async fn test_check_text_without_sources_is_original() {
        let router = test_router();
        let text = format!("{}. {}.", sentence_for("botany"), sentence_for("zoology"));
        let response = post_text(&router, serde_json::json!({ "text": text })).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(status_header(&response), "original");

        let body = body_json(response).await;
        assert_eq!(body["plagiarismScore"], 0.0);
        assert_eq!(body["originalityScore"], 100.0);
        assert!(body["matches"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_check_text_rejects_short_input() {
        let router = test_router();
        let response = post_text(&router, serde_json::json!({ "text": "Too short to check." })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "input_too_short");

        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_check_text_rejects_text_without_sentences() {
        let router = test_router();
        let text = "I came here. I saw it all. I left soon. It was fine. We went home.";
        let response = post_text(&router, serde_json::json!({ "text": text })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "empty_input");
    }

    #[tokio::test]
    async fn test_check_text_missing_field_is_rejected() {
        let router = test_router();
        let response = post_text(&router, serde_json::json!({ "body": "x" })).await;

        assert!(response.status().is_client_error());
    }
}

mod check_file_tests {
    use super::*;

    #[tokio::test]
    async fn test_check_txt_upload() {
        let router = test_router();
        let response = post_file(
            &router,
            "/v1/check?filename=essay.TXT",
            document().into_bytes(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["plagiarismScore"], 20.0);
        assert_eq!(body["sentencesAnalyzed"], 4);
    }

    #[tokio::test]
    async fn test_check_unsupported_extension() {
        let router = test_router();
        let response = post_file(&router, "/v1/check?filename=essay.pdf", b"%PDF-1.7".to_vec()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "unsupported_format");
    }

    #[tokio::test]
    async fn test_check_empty_upload() {
        let router = test_router();
        let response = post_file(&router, "/v1/check?filename=essay.txt", Vec::new()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "extraction_error");
    }

    #[tokio::test]
    async fn test_check_requires_filename() {
        let router = test_router();
        let response = post_file(&router, "/v1/check", document().into_bytes()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "invalid_request");

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("filename"));
    }
}

mod service_endpoint_tests {
    use super::*;

    async fn get(router: &Router, uri: &str) -> axum::response::Response {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router.clone().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = get(&test_router(), "/healthz").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(status_header(&response), "healthy");
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_ready_endpoint_reports_embedder_mode() {
        let response = get(&test_router(), "/ready").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(status_header(&response), "ready");
        assert_eq!(body_json(response).await["embedder_mode"], "real");
    }

    #[tokio::test]
    async fn test_root_describes_service() {
        let response = get(&test_router(), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["service"], "plagcheck");
        assert_eq!(body["sources"][0], "wikipedia");
        assert_eq!(body["sources"][1], "duckduckgo");
        assert_eq!(body["formats"], serde_json::json!(["txt"]));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = get(&test_router(), "/v1/chat/completions").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

mod error_handling_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_request_response() {
        let response = GatewayError::InvalidRequest("Test error".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "invalid_request");

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("Test error"));
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_input_too_short_response() {
        let err = GatewayError::from(DetectionError::InputTooShort { len: 12, min: 50 });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "input_too_short");
    }

    #[tokio::test]
    async fn test_detector_misconfiguration_is_server_error() {
        let err = GatewayError::from(DetectionError::InvalidConfig {
            reason: "concurrency must be positive".to_string(),
        });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_header(&response), "internal_error");
        assert_eq!(body_json(response).await["code"], 500);
    }

    #[tokio::test]
    async fn test_extraction_error_response() {
        let err = GatewayError::from(ExtractError::UnsupportedFormat {
            extension: "docx".to_string(),
        });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "unsupported_format");
    }
}

#[test]
fn test_handler_state_clone_shares_detector() {
    let state = test_state();
    let cloned = state.clone();
    assert!(std::sync::Arc::ptr_eq(&state.detector, &cloned.detector));
}
