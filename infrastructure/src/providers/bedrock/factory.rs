//! Bedrock chat model factory
//!
//! Builds a Bedrock Runtime client per model from static credentials.
//! Nothing here touches the network: the SDK resolves endpoints and signs
//! lazily on the first request.

use super::chat_model::BedrockChatModel;
use aws_sdk_bedrockruntime::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_bedrockruntime::{Client as BedrockClient, Config};
use catalog_application::ports::chat_model::{
    ChatModelBuildError, ChatModelClient, ChatModelFactory, ChatModelSpec,
};
use catalog_domain::{CredentialField, looks_like_region};
use std::sync::Arc;
use tracing::debug;

/// Name reported by the static credentials provider.
const CREDENTIALS_PROVIDER_NAME: &str = "model-catalog";

#[derive(Debug, Clone, Copy, Default)]
pub struct BedrockChatModelFactory;

impl BedrockChatModelFactory {
    pub fn new() -> Self {
        Self
    }

    fn validate(spec: &ChatModelSpec<'_>) -> Result<(), ChatModelBuildError> {
        let id = spec.descriptor.id;
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(ChatModelBuildError::InvalidModelId(id.to_string()));
        }

        let region = spec.credentials.region();
        if !looks_like_region(region) {
            return Err(ChatModelBuildError::InvalidRegion(region.to_string()));
        }

        if !is_token_shaped(spec.credentials.access_key_id()) {
            return Err(ChatModelBuildError::MalformedCredential(
                CredentialField::AccessKeyId,
            ));
        }
        if !is_token_shaped(spec.credentials.secret_access_key()) {
            return Err(ChatModelBuildError::MalformedCredential(
                CredentialField::SecretAccessKey,
            ));
        }
        if let Some(token) = spec.credentials.session_token()
            && !is_token_shaped(token)
        {
            return Err(ChatModelBuildError::MalformedSessionToken);
        }

        let t = spec.temperature;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(ChatModelBuildError::InvalidTemperature(t));
        }

        Ok(())
    }
}

/// Non-empty, printable, no whitespace.
fn is_token_shaped(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| !c.is_whitespace() && !c.is_control())
}

impl ChatModelFactory for BedrockChatModelFactory {
    fn build(
        &self,
        spec: &ChatModelSpec<'_>,
    ) -> Result<Arc<dyn ChatModelClient>, ChatModelBuildError> {
        Self::validate(spec)?;

        let creds = spec.credentials;
        // Session token only for temporary credentials.
        let credentials = Credentials::new(
            creds.access_key_id(),
            creds.secret_access_key(),
            creds.session_token().map(str::to_string),
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let config = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(creds.region().to_string()))
            .credentials_provider(credentials.clone())
            .build();
        let client = BedrockClient::from_conf(config);

        debug!(
            model = spec.descriptor.id,
            region = creds.region(),
            "Created Bedrock client"
        );

        Ok(Arc::new(BedrockChatModel::new(
            client,
            spec.descriptor.id,
            creds.region(),
            spec.temperature,
            credentials,
        )))
    }
}
