//! Infrastructure layer for Copysmith.
//!
//! Contains the concrete [`CopyProvider`](copysmith_core::provider::CopyProvider)
//! for the Anthropic Messages API, configuration file loading, and
//! environment-based API key resolution.

pub mod anthropic;
pub mod config;
pub mod secret;
