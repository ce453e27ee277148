//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

use crate::credentials::CredentialBundle;
use std::path::PathBuf;

/// Top-level provider configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    /// AWS Bedrock settings.
    pub bedrock: BedrockProviderConfig,
}

/// AWS Bedrock provider configuration.
///
/// Every credential field is optional: values from the credentials file
/// take precedence and the loader decides what is missing.
#[derive(Clone, Default, PartialEq)]
pub struct BedrockProviderConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// AWS region, e.g. "us-east-1". No default.
    pub region: Option<String>,
    /// Explicit location of the JSON credentials file.
    pub credentials_file: Option<PathBuf>,
}

impl BedrockProviderConfig {
    /// The configured credential values as a bundle (never carries a session token).
    pub fn credential_bundle(&self) -> CredentialBundle {
        CredentialBundle {
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            region: self.region.clone(),
            session_token: None,
        }
    }
}

impl std::fmt::Debug for BedrockProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BedrockProviderConfig")
            .field("access_key_id", &self.access_key_id.is_some())
            .field("secret_access_key", &self.secret_access_key.is_some())
            .field("region", &self.region)
            .field("credentials_file", &self.credentials_file)
            .finish()
    }
}
