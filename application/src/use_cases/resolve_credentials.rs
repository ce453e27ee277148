//! Resolve Credentials use case
//!
//! Merges the credential store over configured values, field by field.

use crate::ports::credential_store::CredentialStorePort;
use crate::ports::provider_settings::ProviderSettingsPort;
use catalog_domain::CredentialBundle;
use std::sync::Arc;
use tracing::debug;

pub struct ResolveCredentialsUseCase<S: CredentialStorePort, C: ProviderSettingsPort> {
    store: Arc<S>,
    settings: Arc<C>,
}

impl<S: CredentialStorePort, C: ProviderSettingsPort> ResolveCredentialsUseCase<S, C> {
    pub fn new(store: Arc<S>, settings: Arc<C>) -> Self {
        Self { store, settings }
    }

    /// Resolve the bundle. Missing fields are left as `None`; validation
    /// happens in the caller.
    pub async fn execute(&self) -> CredentialBundle {
        let from_file = self.store.load().await;
        debug!(
            file_found = from_file.is_some(),
            "Resolving AWS credentials (file first, then config)"
        );
        CredentialBundle::resolve(from_file, self.settings.bedrock_credentials())
    }
}
