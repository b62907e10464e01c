//! POST /api/generate - turn a copy request into marketing copy.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;

use copysmith_types::copy::{CopyRequest, CopyResult};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/generate
///
/// The body is parsed by hand rather than with the `Json` extractor so a
/// missing `Content-Type` is tolerated and every parse failure gets the same
/// generic 500. An unreadable or oversized body is reported the same way.
pub async fn generate_copy(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CopyResult>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7();

    let body = body.map_err(|e| AppError::MalformedRequest(format!("request {request_id}: {e}")))?;
    let request: CopyRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequest(format!("request {request_id}: {e}")))?;

    let generated = state.copy_service.generate(&request).await;

    tracing::info!(
        request_id = %request_id,
        copy_type = %request.copy_type,
        source = %generated.source,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated copy"
    );

    Ok(Json(CopyResult::copy(generated.text)))
}
