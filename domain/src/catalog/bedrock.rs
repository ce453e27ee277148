//! AWS Bedrock model catalog
//!
//! The fixed set of Claude models offered through Bedrock. Identifiers are
//! Bedrock on-demand model IDs and double as registry keys.

use super::descriptor::{ModelDescriptor, ProviderInfo};

pub const BEDROCK_PROVIDER: ProviderInfo = ProviderInfo {
    key: "bedrock",
    display_name: "AWS Bedrock",
};

/// Sampling temperature applied to every Bedrock chat model.
pub const BEDROCK_TEMPERATURE: f32 = 0.7;

pub static BEDROCK_CHAT_MODELS: [ModelDescriptor; 6] = [
    ModelDescriptor::new(
        "Claude 3.5 Sonnet v2",
        "anthropic.claude-3-5-sonnet-20241022-v2:0",
    ),
    ModelDescriptor::new(
        "Claude 3.5 Sonnet",
        "anthropic.claude-3-5-sonnet-20240620-v1:0",
    ),
    ModelDescriptor::new(
        "Claude 3.5 Haiku",
        "anthropic.claude-3-5-haiku-20241022-v1:0",
    ),
    ModelDescriptor::new("Claude 3 Opus", "anthropic.claude-3-opus-20240229-v1:0"),
    ModelDescriptor::new(
        "Claude 3 Sonnet",
        "anthropic.claude-3-sonnet-20240229-v1:0",
    ),
    ModelDescriptor::new("Claude 3 Haiku", "anthropic.claude-3-haiku-20240307-v1:0"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_unique_ids() {
        let ids: HashSet<_> = BEDROCK_CHAT_MODELS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_catalog_entries() {
        assert_eq!(BEDROCK_CHAT_MODELS[0].display_name, "Claude 3.5 Sonnet v2");
        assert_eq!(
            BEDROCK_CHAT_MODELS[0].id,
            "anthropic.claude-3-5-sonnet-20241022-v2:0"
        );
        assert_eq!(BEDROCK_CHAT_MODELS[5].display_name, "Claude 3 Haiku");
        assert_eq!(
            BEDROCK_CHAT_MODELS[5].id,
            "anthropic.claude-3-haiku-20240307-v1:0"
        );
    }

    #[test]
    fn test_all_ids_are_anthropic() {
        assert!(
            BEDROCK_CHAT_MODELS
                .iter()
                .all(|d| d.id.starts_with("anthropic.claude-3"))
        );
    }

    #[test]
    fn test_provider_info() {
        assert_eq!(BEDROCK_PROVIDER.key, "bedrock");
        assert_eq!(BEDROCK_PROVIDER.display_name, "AWS Bedrock");
    }
}
