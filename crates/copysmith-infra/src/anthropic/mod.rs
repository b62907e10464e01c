//! Anthropic Claude copy provider.
//!
//! This module provides the [`AnthropicProvider`] which implements the
//! [`CopyProvider`](copysmith_core::provider::CopyProvider) trait for a
//! single non-streaming call to the Anthropic Messages API.

pub mod client;
pub mod types;

pub use client::AnthropicProvider;
