//! JSON credentials file
//!
//! Reads `{"accessKeyId", "secretAccessKey", "region", "sessionToken"}`
//! from disk. Every field is optional; a missing or broken file is treated
//! as "no file credentials" so configuration values still apply.

use crate::config::APP_DIR;
use async_trait::async_trait;
use catalog_application::ports::credential_store::CredentialStorePort;
use catalog_domain::CredentialBundle;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CREDENTIALS_FILE_NAME: &str = "aws-credentials.json";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsFile {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    region: Option<String>,
    session_token: Option<String>,
}

impl From<CredentialsFile> for CredentialBundle {
    fn from(file: CredentialsFile) -> Self {
        CredentialBundle {
            access_key_id: file.access_key_id,
            secret_access_key: file.secret_access_key,
            region: file.region,
            session_token: file.session_token,
        }
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

/// Credential store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCredentialStore {
    path: Option<PathBuf>,
}

impl JsonCredentialStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(expand_home(path.as_ref())),
        }
    }

    /// Use `explicit` when given, else the default location.
    pub fn from_config(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::new(path),
            None => Self {
                path: Self::default_path(),
            },
        }
    }

    /// `<config dir>/model-catalog/aws-credentials.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(CREDENTIALS_FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn read(path: &Path) -> Option<CredentialBundle> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No AWS credentials file");
                return None;
            }
            Err(e) => {
                warn!(
                    "Could not read AWS credentials file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        match serde_json::from_str::<CredentialsFile>(&content) {
            Ok(file) => {
                debug!(path = %path.display(), "Loaded AWS credentials file");
                Some(file.into())
            }
            Err(e) => {
                warn!(
                    "Ignoring malformed AWS credentials file {}: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }
}

#[async_trait]
impl CredentialStorePort for JsonCredentialStore {
    async fn load(&self) -> Option<CredentialBundle> {
        match &self.path {
            Some(path) => Self::read(path).await,
            None => None,
        }
    }
}
