//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod providers;

pub use providers::{FileBedrockConfig, FileProvidersConfig};

use catalog_domain::{ProviderConfig, looks_like_region};
use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider settings (e.g. Bedrock credentials)
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    pub fn provider_config(&self) -> ProviderConfig {
        self.providers.to_domain()
    }

    /// Validate the configuration, returning all detected issues.
    ///
    /// Nothing here is fatal: the credentials file may still complete a
    /// partial configuration.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let bedrock = &self.providers.bedrock;

        let has_access = is_set(&bedrock.access_key_id);
        let has_secret = is_set(&bedrock.secret_access_key);
        if has_access != has_secret {
            let (field, other) = if has_access {
                ("secret_access_key", "access_key_id")
            } else {
                ("access_key_id", "secret_access_key")
            };
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: format!("providers.bedrock.{}", field),
                message: format!(
                    "providers.bedrock.{} is set but {} is not",
                    other, field
                ),
            });
        }

        if let Some(region) = bedrock.region.as_deref()
            && !region.trim().is_empty()
            && !looks_like_region(region)
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "providers.bedrock.region".to_string(),
                message: format!(
                    "providers.bedrock.region: '{}' does not look like an AWS region",
                    region
                ),
            });
        }

        issues
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
