//! HTTP/REST API layer for Copysmith.
//!
//! Axum-based API under `/api/` with CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
