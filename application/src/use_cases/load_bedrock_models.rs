//! Load Bedrock Models use case
//!
//! Resolves credentials, validates them and constructs one chat model per
//! catalog descriptor. Construction is all-or-nothing.

use super::resolve_credentials::ResolveCredentialsUseCase;
use crate::ports::chat_model::{
    ChatModel, ChatModelBuildError, ChatModelFactory, ChatModelRegistry, ChatModelSpec,
};
use crate::ports::credential_store::CredentialStorePort;
use crate::ports::provider_settings::ProviderSettingsPort;
use catalog_domain::{
    AwsCredentials, BEDROCK_CHAT_MODELS, BEDROCK_TEMPERATURE, CredentialBundle, MissingCredentials,
    ModelDescriptor,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors that can occur while loading the catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadChatModelsError {
    #[error(transparent)]
    MissingCredentials(#[from] MissingCredentials),

    #[error("Failed to construct {model_id}: {source}")]
    Build {
        model_id: String,
        #[source]
        source: ChatModelBuildError,
    },
}

/// Build a registry from validated credentials. Stops at the first failure
/// and discards everything built so far.
pub fn build_registry<F: ChatModelFactory + ?Sized>(
    factory: &F,
    catalog: &[ModelDescriptor],
    credentials: &AwsCredentials,
    temperature: f32,
) -> Result<ChatModelRegistry, LoadChatModelsError> {
    let mut registry = ChatModelRegistry::empty();

    for descriptor in catalog {
        let spec = ChatModelSpec {
            descriptor,
            credentials,
            temperature,
        };
        let model = factory
            .build(&spec)
            .map_err(|source| LoadChatModelsError::Build {
                model_id: descriptor.id.to_string(),
                source,
            })?;

        registry.insert(
            descriptor.id,
            ChatModel {
                display_name: descriptor.display_name.to_string(),
                model,
            },
        );
    }

    Ok(registry)
}

/// Use case for loading the AWS Bedrock chat model catalog
pub struct LoadBedrockModelsUseCase<S, C, F>
where
    S: CredentialStorePort,
    C: ProviderSettingsPort,
    F: ChatModelFactory,
{
    resolver: ResolveCredentialsUseCase<S, C>,
    factory: Arc<F>,
    catalog: &'static [ModelDescriptor],
}

impl<S, C, F> LoadBedrockModelsUseCase<S, C, F>
where
    S: CredentialStorePort,
    C: ProviderSettingsPort,
    F: ChatModelFactory,
{
    pub fn new(store: Arc<S>, settings: Arc<C>, factory: Arc<F>) -> Self {
        Self {
            resolver: ResolveCredentialsUseCase::new(store, settings),
            factory,
            catalog: &BEDROCK_CHAT_MODELS,
        }
    }

    pub fn with_catalog(mut self, catalog: &'static [ModelDescriptor]) -> Self {
        self.catalog = catalog;
        self
    }

    /// Load the registry, reporting why it could not be built.
    pub async fn try_execute(&self) -> Result<ChatModelRegistry, LoadChatModelsError> {
        let bundle = self.resolver.execute().await;
        self.load_from(bundle)
    }

    /// Load the registry. Never fails: incomplete credentials or a
    /// construction error are logged and yield an empty registry.
    pub async fn execute(&self) -> ChatModelRegistry {
        let bundle = self.resolver.execute().await;
        let region = bundle.region.clone().unwrap_or_default();

        match self.load_from(bundle) {
            Ok(registry) => {
                info!(
                    count = registry.len(),
                    region = %region,
                    "Loaded {} AWS Bedrock models from region: {}",
                    registry.len(),
                    region
                );
                registry
            }
            Err(LoadChatModelsError::MissingCredentials(missing)) => {
                info!(
                    missing = %missing,
                    "AWS Bedrock credentials not found. \
                     Please check your credentials file or config file"
                );
                ChatModelRegistry::empty()
            }
            Err(LoadChatModelsError::Build { model_id, source }) => {
                error!(
                    model = %model_id,
                    kind = source.kind(),
                    "Error loading AWS Bedrock models: {}",
                    source
                );
                ChatModelRegistry::empty()
            }
        }
    }

    fn load_from(
        &self,
        bundle: CredentialBundle,
    ) -> Result<ChatModelRegistry, LoadChatModelsError> {
        let credentials = bundle.into_complete()?;
        build_registry(
            self.factory.as_ref(),
            self.catalog,
            &credentials,
            BEDROCK_TEMPERATURE,
        )
    }
}
