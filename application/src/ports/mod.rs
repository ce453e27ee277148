//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chat_model;
pub mod chat_model_provider;
pub mod credential_store;
pub mod provider_settings;
