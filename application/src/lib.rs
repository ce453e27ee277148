//! Application layer for model-catalog
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_model::{
        ChatModel, ChatModelBuildError, ChatModelClient, ChatModelFactory, ChatModelRegistry,
        ChatModelSpec,
    },
    chat_model_provider::ChatModelProvider,
    credential_store::{CredentialStorePort, NoCredentialStore},
    provider_settings::ProviderSettingsPort,
};
pub use use_cases::aggregate_providers::{
    AggregateProvidersUseCase, AvailableProviders, ProviderModels,
};
pub use use_cases::load_bedrock_models::{
    LoadBedrockModelsUseCase, LoadChatModelsError, build_registry,
};
pub use use_cases::resolve_credentials::ResolveCredentialsUseCase;
