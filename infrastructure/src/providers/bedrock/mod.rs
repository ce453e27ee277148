//! AWS Bedrock provider
//!
//! Constructs Bedrock Runtime clients for the static Claude catalog from
//! resolved AWS credentials.

mod chat_model;
mod factory;
mod provider;

pub use chat_model::BedrockChatModel;
pub use factory::BedrockChatModelFactory;
pub use provider::BedrockModelProvider;
