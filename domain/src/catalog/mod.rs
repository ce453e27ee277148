//! Static model catalogs.
//!
//! - [`descriptor::ModelDescriptor`] — a selectable model (display name + identifier)
//! - [`descriptor::ProviderInfo`] — identity of a model provider
//! - [`bedrock`] — the AWS Bedrock catalog

pub mod bedrock;
pub mod descriptor;
