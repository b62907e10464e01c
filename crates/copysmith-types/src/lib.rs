//! Shared domain types for Copysmith.
//!
//! Copy requests and results as they travel over the wire, the tone and
//! copy-type tag sets, configuration shapes, and provider error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod copy;
pub mod error;
