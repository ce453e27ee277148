//! AWS credential model.
//!
//! A [`CredentialBundle`] is what the sources produce: every field optional,
//! merged per field with file values taking precedence. Validation turns a
//! bundle into [`AwsCredentials`] or reports the [`MissingCredentials`].

mod bundle;
mod complete;

pub use bundle::{CredentialBundle, CredentialField, MissingCredentials};
pub use complete::AwsCredentials;
