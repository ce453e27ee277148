//! Provider configuration from TOML (`[providers]` section)

use catalog_domain::{BedrockProviderConfig, ProviderConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// AWS Bedrock provider configuration.
///
/// # Example
///
/// ```toml
/// [providers.bedrock]
/// access_key_id = "AKIA..."
/// secret_access_key = "..."
/// region = "us-east-1"
/// credentials_file = "~/.config/model-catalog/aws-credentials.json"
/// ```
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS access key id (overridden by the credentials file)
    pub access_key_id: Option<String>,
    /// AWS secret access key (overridden by the credentials file)
    pub secret_access_key: Option<String>,
    /// AWS region for Bedrock models (no default)
    pub region: Option<String>,
    /// Location of the JSON credentials file
    pub credentials_file: Option<PathBuf>,
}

impl FileBedrockConfig {
    pub fn to_domain(&self) -> BedrockProviderConfig {
        BedrockProviderConfig {
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            region: self.region.clone(),
            credentials_file: self.credentials_file.clone(),
        }
    }
}

impl fmt::Debug for FileBedrockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileBedrockConfig")
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| "****"))
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "****"))
            .field("region", &self.region)
            .field("credentials_file", &self.credentials_file)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// AWS Bedrock settings.
    pub bedrock: FileBedrockConfig,
}

impl FileProvidersConfig {
    pub fn to_domain(&self) -> ProviderConfig {
        ProviderConfig {
            bedrock: self.bedrock.to_domain(),
        }
    }
}
