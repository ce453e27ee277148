//! Credential store port
//!
//! Source of file-based AWS credentials. Format and location belong to the
//! adapter.

use async_trait::async_trait;
use catalog_domain::CredentialBundle;

/// Port for reading stored credentials.
///
/// Implementations never fail: an absent, unreadable or malformed store
/// yields `None` so the resolver can fall back to configuration.
#[async_trait]
pub trait CredentialStorePort: Send + Sync {
    async fn load(&self) -> Option<CredentialBundle>;
}

/// A store that never has credentials.
pub struct NoCredentialStore;

#[async_trait]
impl CredentialStorePort for NoCredentialStore {
    async fn load(&self) -> Option<CredentialBundle> {
        None
    }
}
