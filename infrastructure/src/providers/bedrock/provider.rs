//! Bedrock chat model provider
//!
//! Wires the JSON credential store, configured values and the SDK factory
//! into the catalog loader.

use super::factory::BedrockChatModelFactory;
use crate::credentials::JsonCredentialStore;
use async_trait::async_trait;
use catalog_application::ports::chat_model::ChatModelRegistry;
use catalog_application::ports::chat_model_provider::ChatModelProvider;
use catalog_application::use_cases::load_bedrock_models::{
    LoadBedrockModelsUseCase, LoadChatModelsError,
};
use catalog_domain::{BEDROCK_PROVIDER, BedrockProviderConfig, ProviderInfo};
use std::path::Path;
use std::sync::Arc;

type BedrockLoader =
    LoadBedrockModelsUseCase<JsonCredentialStore, BedrockProviderConfig, BedrockChatModelFactory>;

pub struct BedrockModelProvider {
    loader: BedrockLoader,
}

impl BedrockModelProvider {
    /// `credentials_file` overrides the path from `config`.
    pub fn new(config: BedrockProviderConfig, credentials_file: Option<&Path>) -> Self {
        let path = credentials_file.or(config.credentials_file.as_deref());
        let store = JsonCredentialStore::from_config(path);
        Self::with_store(config, store)
    }

    pub fn with_store(config: BedrockProviderConfig, store: JsonCredentialStore) -> Self {
        Self {
            loader: LoadBedrockModelsUseCase::new(
                Arc::new(store),
                Arc::new(config),
                Arc::new(BedrockChatModelFactory::new()),
            ),
        }
    }

    pub async fn try_load(&self) -> Result<ChatModelRegistry, LoadChatModelsError> {
        self.loader.try_execute().await
    }
}

#[async_trait]
impl ChatModelProvider for BedrockModelProvider {
    fn info(&self) -> ProviderInfo {
        BEDROCK_PROVIDER
    }

    async fn load_chat_models(&self) -> ChatModelRegistry {
        self.loader.execute().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::bedrock::BedrockChatModel;
    use catalog_domain::{BEDROCK_CHAT_MODELS, CredentialField, MissingCredentials};
    use std::path::PathBuf;

    fn config(region: Option<&str>) -> BedrockProviderConfig {
        BedrockProviderConfig {
            access_key_id: Some("AKIACONFIG".to_string()),
            secret_access_key: Some("config-secret".to_string()),
            region: region.map(String::from),
            credentials_file: None,
        }
    }

    fn missing_file(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("absent.json")
    }

    #[tokio::test]
    async fn test_loads_full_catalog_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let absent = missing_file(&dir);
        let provider = BedrockModelProvider::new(config(Some("us-east-1")), Some(absent.as_path()));
        let registry = provider.load_chat_models().await;

        assert_eq!(provider.info().key, "bedrock");
        assert_eq!(registry.len(), 6);
        for descriptor in BEDROCK_CHAT_MODELS.iter() {
            let entry = registry.get(descriptor.id).unwrap();
            assert_eq!(entry.display_name, descriptor.display_name);
        }
    }

    #[tokio::test]
    async fn test_missing_region_yields_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let absent = missing_file(&dir);
        let provider = BedrockModelProvider::new(config(None), Some(absent.as_path()));

        assert!(provider.load_chat_models().await.is_empty());
        assert_eq!(
            provider.try_load().await.unwrap_err(),
            LoadChatModelsError::MissingCredentials(MissingCredentials {
                fields: vec![CredentialField::Region],
            })
        );
    }

    #[tokio::test]
    async fn test_file_credentials_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aws.json");
        std::fs::write(
            &path,
            r#"{ "accessKeyId": "AKIAFILE", "region": "eu-west-1", "sessionToken": "sts" }"#,
        )
        .unwrap();

        let provider = BedrockModelProvider::new(config(Some("us-east-1")), Some(path.as_path()));
        let registry = provider.load_chat_models().await;
        assert_eq!(registry.len(), 6);

        for (_, entry) in &registry {
            let handle = entry
                .model
                .as_any()
                .downcast_ref::<BedrockChatModel>()
                .unwrap();
            assert_eq!(handle.region(), "eu-west-1");
            assert_eq!(handle.credentials().access_key_id(), "AKIAFILE");
            assert_eq!(handle.credentials().secret_access_key(), "config-secret");
            assert_eq!(handle.credentials().session_token(), Some("sts"));
        }
    }

    #[tokio::test]
    async fn test_config_credentials_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aws.json");
        std::fs::write(&path, r#"{ "region": "ap-southeast-2" }"#).unwrap();

        let mut cfg = config(None);
        cfg.credentials_file = Some(path);
        let registry = BedrockModelProvider::new(cfg, None).load_chat_models().await;
        assert_eq!(registry.len(), 6);
    }

    #[tokio::test]
    async fn test_malformed_region_yields_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let absent = missing_file(&dir);
        let provider =
            BedrockModelProvider::new(config(Some("Not A Region")), Some(absent.as_path()));

        assert!(provider.load_chat_models().await.is_empty());
        assert!(matches!(
            provider.try_load().await,
            Err(LoadChatModelsError::Build { .. })
        ));
    }
}
