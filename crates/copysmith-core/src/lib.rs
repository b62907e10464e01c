//! Business logic for Copysmith.
//!
//! This crate turns a [`CopyRequest`](copysmith_types::copy::CopyRequest)
//! into marketing copy. It defines the [`CopyProvider`](provider::CopyProvider)
//! port that infrastructure implements, and never depends on an HTTP client
//! itself.

pub mod fallback;
pub mod prompt;
pub mod provider;
pub mod service;
