//! Infrastructure layer for model-catalog
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading, the JSON
//! credential store and the AWS Bedrock client factory.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileBedrockConfig, FileConfig, FileProvidersConfig,
    Severity,
};
pub use credentials::JsonCredentialStore;
pub use providers::configured_providers;

#[cfg(feature = "bedrock")]
pub use providers::bedrock::{BedrockChatModel, BedrockChatModelFactory, BedrockModelProvider};
