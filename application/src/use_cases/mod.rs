//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod aggregate_providers;
pub mod load_bedrock_models;
pub mod resolve_credentials;
