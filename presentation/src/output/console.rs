//! Console output formatter for loaded catalogs

use crate::output::formatter::OutputFormatter;
use catalog_application::AvailableProviders;
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderView<'a> {
    key: &'a str,
    display_name: &'a str,
    models: Vec<ModelView<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelView<'a> {
    id: &'a str,
    display_name: &'a str,
    temperature: f32,
}

/// Formats provider catalogs for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-readable listing grouped by provider
    pub fn format(providers: &AvailableProviders) -> String {
        if providers.is_empty() {
            return format!(
                "{}\n",
                "No chat models available. Check your AWS credentials file or config file."
                    .yellow()
            );
        }

        let mut output = String::new();
        for provider in providers.iter() {
            output.push_str(&format!(
                "{} {}\n",
                provider.info.display_name.cyan().bold(),
                format!("({} models)", provider.models.len()).dimmed()
            ));
            for (id, model) in &provider.models {
                output.push_str(&format!("  {:<24} {}\n", model.display_name.bold(), id));
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json(providers: &AvailableProviders) -> String {
        let view: Vec<ProviderView<'_>> = providers
            .iter()
            .map(|p| ProviderView {
                key: p.info.key,
                display_name: p.info.display_name,
                models: p
                    .models
                    .iter()
                    .map(|(id, m)| ModelView {
                        id,
                        display_name: &m.display_name,
                        temperature: m.model.temperature(),
                    })
                    .collect(),
            })
            .collect();
        serde_json::to_string_pretty(&serde_json::json!({ "providers": view }))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, providers: &AvailableProviders) -> String {
        Self::format(providers)
    }

    fn format_json(&self, providers: &AvailableProviders) -> String {
        Self::format_json(providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_application::{
        AggregateProvidersUseCase, ChatModel, ChatModelClient, ChatModelProvider,
        ChatModelRegistry,
    };
    use catalog_domain::{BEDROCK_CHAT_MODELS, BEDROCK_PROVIDER, ProviderInfo};
    use std::any::Any;
    use std::sync::Arc;

    #[derive(Debug)]
    struct StubClient(&'static str);

    impl ChatModelClient for StubClient {
        fn model_id(&self) -> &str {
            self.0
        }

        fn temperature(&self) -> f32 {
            0.7
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct StubProvider(bool);

    #[async_trait]
    impl ChatModelProvider for StubProvider {
        fn info(&self) -> ProviderInfo {
            BEDROCK_PROVIDER
        }

        async fn load_chat_models(&self) -> ChatModelRegistry {
            let mut registry = ChatModelRegistry::empty();
            if self.0 {
                for d in BEDROCK_CHAT_MODELS.iter() {
                    registry.insert(
                        d.id,
                        ChatModel {
                            display_name: d.display_name.to_string(),
                            model: Arc::new(StubClient(d.id)),
                        },
                    );
                }
            }
            registry
        }
    }

    async fn available(with_models: bool) -> AvailableProviders {
        AggregateProvidersUseCase::new(vec![Arc::new(StubProvider(with_models))])
            .execute()
            .await
    }

    #[tokio::test]
    async fn test_text_lists_every_model() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&available(true).await);
        assert!(text.contains("AWS Bedrock (6 models)"));
        for d in BEDROCK_CHAT_MODELS.iter() {
            assert!(text.contains(d.id));
            assert!(text.contains(d.display_name));
        }
    }

    #[tokio::test]
    async fn test_text_when_empty() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&available(false).await);
        assert!(text.contains("No chat models available"));
    }

    #[tokio::test]
    async fn test_json_shape() {
        let json = ConsoleFormatter::format_json(&available(true).await);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let providers = value["providers"].as_array().unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0]["key"], "bedrock");
        assert_eq!(providers[0]["displayName"], "AWS Bedrock");
        let models = providers[0]["models"].as_array().unwrap();
        assert_eq!(models.len(), 6);
        assert!(models.iter().any(|m| m["id"] == "anthropic.claude-3-haiku-20240307-v1:0"
            && m["displayName"] == "Claude 3 Haiku"));
    }

    #[tokio::test]
    async fn test_json_when_empty() {
        let json = ConsoleFormatter::format_json(&available(false).await);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["providers"].as_array().unwrap().len(), 0);
    }
}
