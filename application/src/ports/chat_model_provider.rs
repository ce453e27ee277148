//! Chat model provider port
//!
//! A provider contributes one catalog (registry) to the aggregated view.

use super::chat_model::ChatModelRegistry;
use async_trait::async_trait;
use catalog_domain::ProviderInfo;

#[async_trait]
pub trait ChatModelProvider: Send + Sync {
    fn info(&self) -> ProviderInfo;

    /// Load this provider's registry. Never fails; an unavailable provider
    /// returns an empty registry.
    async fn load_chat_models(&self) -> ChatModelRegistry;
}
