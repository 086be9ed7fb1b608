use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use plagcheck::aggregate::DetectionResult;
use plagcheck::embedding::Embedder;
use plagcheck::extract::{extension_of, extract_text};
use plagcheck::retrieval::{PrimarySource, SecondarySource};

use super::STATUS_HEADER;
use super::error::GatewayError;
use super::state::HandlerState;

#[derive(Debug, Deserialize)]
pub struct CheckTextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckFileParams {
    pub filename: Option<String>,
}

/// `POST /v1/check-text` with `{"text": "..."}`.
#[tracing::instrument(skip_all, fields(text_len = request.text.len()))]
pub async fn check_text_handler<P, S, E>(
    State(state): State<HandlerState<P, S, E>>,
    Json(request): Json<CheckTextRequest>,
) -> Result<Response, GatewayError>
where
    P: PrimarySource + 'static,
    S: SecondarySource + 'static,
    E: Embedder + 'static,
{
    let result = state.detector.check_document(&request.text).await?;
    Ok(make_response(result))
}

/// `POST /v1/check?filename=essay.txt` with the raw file as body.
#[tracing::instrument(skip_all, fields(filename = ?params.filename, bytes = body.len()))]
pub async fn check_file_handler<P, S, E>(
    State(state): State<HandlerState<P, S, E>>,
    Query(params): Query<CheckFileParams>,
    body: Bytes,
) -> Result<Response, GatewayError>
where
    P: PrimarySource + 'static,
    S: SecondarySource + 'static,
    E: Embedder + 'static,
{
    let filename = params
        .filename
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| GatewayError::InvalidRequest("filename is required".to_string()))?;

    let extension = extension_of(&filename).unwrap_or_default();
    let text = extract_text(&body, &extension)?;
    info!(
        chars = text.chars().count(),
        words = text.split_whitespace().count(),
        "Extracted upload"
    );

    let result = state.detector.check_document(&text).await?;
    Ok(make_response(result))
}

fn make_response(result: DetectionResult) -> Response {
    let tag = if result.has_matches() {
        "matches_found"
    } else {
        "original"
    };

    let mut headers = HeaderMap::new();
    headers.insert(STATUS_HEADER, HeaderValue::from_static(tag));
    (StatusCode::OK, headers, Json(result)).into_response()
}
