//! Application error type mapping to HTTP responses.
//!
//! Every variant renders the same `500 {"error": "Failed to generate copy"}`
//! body. The detail is logged, never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use copysmith_types::copy::CopyResult;

#[derive(Debug)]
pub enum AppError {
    /// Request body missing or not a valid copy request.
    MalformedRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MalformedRequest(detail) => {
                tracing::warn!(detail = %detail, "rejected malformed copy request");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(CopyResult::generic_error())).into_response()
    }
}
