use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use plagcheck::extract::ExtractError;
use plagcheck::pipeline::DetectionError;

use super::STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Detection(#[from] DetectionError),

    #[error(transparent)]
    Extraction(#[from] ExtractError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    fn status_and_tag(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::Detection(DetectionError::InputTooShort { .. }) => {
                (StatusCode::BAD_REQUEST, "input_too_short")
            }
            GatewayError::Detection(DetectionError::EmptyInput) => {
                (StatusCode::BAD_REQUEST, "empty_input")
            }
            GatewayError::Detection(DetectionError::InvalidConfig { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
            GatewayError::Extraction(ExtractError::UnsupportedFormat { .. }) => {
                (StatusCode::BAD_REQUEST, "unsupported_format")
            }
            GatewayError::Extraction(_) => (StatusCode::BAD_REQUEST, "extraction_error"),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, tag) = self.status_and_tag();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let mut headers = HeaderMap::new();
        headers.insert(STATUS_HEADER, HeaderValue::from_static(tag));

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
