//! HTTP request handlers for the REST API.

pub mod copy_types;
pub mod generate;
