//! Provider settings port
//!
//! Read access to the credential values held by the configuration file.

use catalog_domain::{BedrockProviderConfig, CredentialBundle};

/// Getters for configured Bedrock credential values.
pub trait ProviderSettingsPort: Send + Sync {
    fn bedrock_access_key_id(&self) -> Option<String>;
    fn bedrock_secret_access_key(&self) -> Option<String>;
    fn bedrock_region(&self) -> Option<String>;

    /// All configured values as a bundle.
    fn bedrock_credentials(&self) -> CredentialBundle {
        CredentialBundle {
            access_key_id: self.bedrock_access_key_id(),
            secret_access_key: self.bedrock_secret_access_key(),
            region: self.bedrock_region(),
            session_token: None,
        }
    }
}

impl ProviderSettingsPort for BedrockProviderConfig {
    fn bedrock_access_key_id(&self) -> Option<String> {
        self.access_key_id.clone()
    }

    fn bedrock_secret_access_key(&self) -> Option<String> {
        self.secret_access_key.clone()
    }

    fn bedrock_region(&self) -> Option<String> {
        self.region.clone()
    }

    fn bedrock_credentials(&self) -> CredentialBundle {
        self.credential_bundle()
    }
}
