//! Chat model provider adapters.

#[cfg(feature = "bedrock")]
pub mod bedrock;

use catalog_application::ports::chat_model_provider::ChatModelProvider;
use catalog_domain::ProviderConfig;
use std::path::Path;
use std::sync::Arc;

/// Build every provider compiled into this crate.
pub fn configured_providers(
    config: &ProviderConfig,
    credentials_file: Option<&Path>,
) -> Vec<Arc<dyn ChatModelProvider>> {
    let mut providers: Vec<Arc<dyn ChatModelProvider>> = Vec::new();

    #[cfg(feature = "bedrock")]
    providers.push(Arc::new(bedrock::BedrockModelProvider::new(
        config.bedrock.clone(),
        credentials_file,
    )));

    #[cfg(not(feature = "bedrock"))]
    let _ = (config, credentials_file);

    providers
}
