//! HTTP gateway (Axum) for document checks.
//!
//! This module is primarily used by the `plagcheck` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::{check_file_handler, check_text_handler};
pub use state::HandlerState;

use plagcheck::constants::MAX_UPLOAD_BYTES;
use plagcheck::embedding::Embedder;
use plagcheck::extract::SUPPORTED_EXTENSIONS;
use plagcheck::retrieval::{PrimarySource, SecondarySource};

/// Response header carrying a short machine-readable outcome.
pub const STATUS_HEADER: &str = "x-plagcheck-status";

pub fn create_router_with_state<P, S, E>(state: HandlerState<P, S, E>) -> Router
where
    P: PrimarySource + 'static,
    S: SecondarySource + 'static,
    E: Embedder + 'static,
{
    Router::new()
        .route("/", get(root_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<P, S, E>))
        .route("/v1/check-text", post(check_text_handler::<P, S, E>))
        .route(
            "/v1/check",
            post(check_file_handler::<P, S, E>).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub sources: [&'static str; 2],
    pub model: &'static str,
    pub formats: &'static [&'static str],
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub embedder_mode: &'static str,
}

pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "plagcheck",
        version: env!("CARGO_PKG_VERSION"),
        sources: ["wikipedia", "duckduckgo"],
        model: "all-MiniLM-L6-v2",
        formats: SUPPORTED_EXTENSIONS,
    })
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(STATUS_HEADER, HeaderValue::from_static("healthy"));

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<P, S, E>(State(state): State<HandlerState<P, S, E>>) -> Response
where
    P: PrimarySource + 'static,
    S: SecondarySource + 'static,
    E: Embedder + 'static,
{
    let mut headers = HeaderMap::new();
    headers.insert(STATUS_HEADER, HeaderValue::from_static("ready"));

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            embedder_mode: state.embedder_mode(),
        }),
    )
        .into_response()
}
