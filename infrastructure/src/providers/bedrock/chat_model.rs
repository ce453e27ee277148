//! Bedrock chat model handle
//!
//! An SDK client bound to one model identifier, region and credential set.

use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::config::Credentials;
use catalog_application::ports::chat_model::ChatModelClient;
use std::any::Any;
use std::fmt;

pub struct BedrockChatModel {
    client: BedrockClient,
    model_id: String,
    region: String,
    temperature: f32,
    credentials: Credentials,
}

impl BedrockChatModel {
    pub fn new(
        client: BedrockClient,
        model_id: impl Into<String>,
        region: impl Into<String>,
        temperature: f32,
        credentials: Credentials,
    ) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            region: region.into(),
            temperature,
            credentials,
        }
    }

    /// The underlying Bedrock Runtime client.
    pub fn client(&self) -> &BedrockClient {
        &self.client
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Static credentials the client signs requests with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl fmt::Debug for BedrockChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BedrockChatModel")
            .field("model_id", &self.model_id)
            .field("region", &self.region)
            .field("temperature", &self.temperature)
            .field("session_token", &self.credentials.session_token().is_some())
            .finish_non_exhaustive()
    }
}

impl ChatModelClient for BedrockChatModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
