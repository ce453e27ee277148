//! Aggregate Providers use case
//!
//! Loads every provider's catalog and keeps those that have models.

use crate::ports::chat_model::ChatModelRegistry;
use crate::ports::chat_model_provider::ChatModelProvider;
use catalog_domain::ProviderInfo;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One provider's loaded catalog.
#[derive(Debug, Clone)]
pub struct ProviderModels {
    pub info: ProviderInfo,
    pub models: ChatModelRegistry,
}

/// Providers with at least one model, in registration order.
#[derive(Debug, Clone, Default)]
pub struct AvailableProviders {
    providers: Vec<ProviderModels>,
}

impl AvailableProviders {
    pub fn get(&self, key: &str) -> Option<&ProviderModels> {
        self.providers.iter().find(|p| p.info.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|p| p.info.key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProviderModels> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Number of models across all providers.
    pub fn model_count(&self) -> usize {
        self.providers.iter().map(|p| p.models.len()).sum()
    }
}

pub struct AggregateProvidersUseCase {
    providers: Vec<Arc<dyn ChatModelProvider>>,
}

impl AggregateProvidersUseCase {
    pub fn new(providers: Vec<Arc<dyn ChatModelProvider>>) -> Self {
        Self { providers }
    }

    pub async fn execute(&self) -> AvailableProviders {
        let mut available = AvailableProviders::default();

        for provider in &self.providers {
            let info = provider.info();
            if available.get(info.key).is_some() {
                warn!(provider = info.key, "Duplicate provider key, keeping the first");
                continue;
            }

            let models = provider.load_chat_models().await;
            if models.is_empty() {
                debug!(provider = info.key, "Provider has no models, skipping");
                continue;
            }
            available.providers.push(ProviderModels { info, models });
        }

        info!(
            providers = available.len(),
            models = available.model_count(),
            "Chat model providers loaded"
        );
        available
    }
}
