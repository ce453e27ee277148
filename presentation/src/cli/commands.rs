//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the model listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored table-like listing
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for model-catalog
#[derive(Parser, Debug)]
#[command(name = "model-catalog")]
#[command(author, version, about = "List the chat models available through AWS Bedrock")]
#[command(long_about = r#"
Resolves AWS credentials and builds the AWS Bedrock chat model catalog.

Credentials are read per field from the JSON credentials file first, then
from the configuration file:

  {"accessKeyId": "...", "secretAccessKey": "...", "region": "...", "sessionToken": "..."}

Configuration files are loaded from (in priority order):
1. MODEL_CATALOG_* environment variables
2. --config <path>          Explicit config file
3. ./model-catalog.toml     Project-level config
4. ~/.config/model-catalog/config.toml   Global config

Example:
  model-catalog
  model-catalog --credentials-file ./aws-credentials.json --output json
"#)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Path to the JSON credentials file
    #[arg(long, value_name = "PATH")]
    pub credentials_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
