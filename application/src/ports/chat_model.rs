//! Chat model port
//!
//! Defines the handle type stored in registries and the factory that
//! adapters implement to construct provider clients.

use catalog_domain::{AwsCredentials, CredentialField, ModelDescriptor};
use std::any::Any;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// An initialized chat-model client bound to one model.
///
/// Construction must not perform network I/O.
pub trait ChatModelClient: Send + Sync + fmt::Debug {
    /// Provider-specific model identifier.
    fn model_id(&self) -> &str;

    fn temperature(&self) -> f32;

    /// Access to the concrete client (e.g. to reach the SDK handle).
    fn as_any(&self) -> &dyn Any;
}

/// Registry entry: display name plus the constructed client.
#[derive(Debug, Clone)]
pub struct ChatModel {
    pub display_name: String,
    pub model: Arc<dyn ChatModelClient>,
}

/// Mapping from model identifier to [`ChatModel`], built fresh per load.
#[derive(Debug, Clone, Default)]
pub struct ChatModelRegistry {
    models: BTreeMap<String, ChatModel>,
}

impl ChatModelRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, model: ChatModel) {
        self.models.insert(id.into(), model);
    }

    pub fn get(&self, id: &str) -> Option<&ChatModel> {
        self.models.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ChatModel> {
        self.models.iter()
    }
}

impl<'a> IntoIterator for &'a ChatModelRegistry {
    type Item = (&'a String, &'a ChatModel);
    type IntoIter = btree_map::Iter<'a, String, ChatModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

/// Everything a factory needs to construct one client.
#[derive(Debug, Clone, Copy)]
pub struct ChatModelSpec<'a> {
    pub descriptor: &'a ModelDescriptor,
    pub credentials: &'a AwsCredentials,
    pub temperature: f32,
}

/// Errors raised while constructing a client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatModelBuildError {
    #[error("Invalid model identifier: '{0}'")]
    InvalidModelId(String),

    #[error("Invalid region: '{0}'")]
    InvalidRegion(String),

    #[error("Malformed credential value for {0}")]
    MalformedCredential(CredentialField),

    #[error("Malformed session token")]
    MalformedSessionToken,

    #[error("Temperature {0} is outside 0.0..=1.0")]
    InvalidTemperature(f32),

    #[error("Client construction failed: {0}")]
    Client(String),
}

impl ChatModelBuildError {
    /// Short stable label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatModelBuildError::InvalidModelId(_) => "invalid_model_id",
            ChatModelBuildError::InvalidRegion(_) => "invalid_region",
            ChatModelBuildError::MalformedCredential(_) => "malformed_credential",
            ChatModelBuildError::MalformedSessionToken => "malformed_session_token",
            ChatModelBuildError::InvalidTemperature(_) => "invalid_temperature",
            ChatModelBuildError::Client(_) => "client",
        }
    }
}

/// Constructs provider clients from a descriptor and credentials.
pub trait ChatModelFactory: Send + Sync {
    fn build(
        &self,
        spec: &ChatModelSpec<'_>,
    ) -> Result<Arc<dyn ChatModelClient>, ChatModelBuildError>;
}
