//! Domain layer for model-catalog
//!
//! This crate contains the model catalogs, credential rules and provider
//! configuration types. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Descriptor**: a static (display name, identifier) pair for one model
//! - **Credential bundle**: credential values as read, merged per field
//!   with file values taking precedence over configured ones

pub mod catalog;
pub mod core;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use catalog::{
    bedrock::{BEDROCK_CHAT_MODELS, BEDROCK_PROVIDER, BEDROCK_TEMPERATURE},
    descriptor::{ModelDescriptor, ProviderInfo},
};
pub use crate::core::string::{looks_like_region, mask, non_empty};
pub use credentials::{AwsCredentials, CredentialBundle, CredentialField, MissingCredentials};
pub use providers::{BedrockProviderConfig, ProviderConfig};
