//! CLI entrypoint for model-catalog
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use catalog_application::AggregateProvidersUseCase;
use catalog_infrastructure::{ConfigLoader, Severity, configured_providers};
use catalog_presentation::{Cli, ConsoleFormatter, OutputFormat};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` wins when set. The returned guard must live until exit so
/// buffered file logs are flushed.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli)?;

    if cli.show_config {
        for line in ConfigLoader::config_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    info!("Starting model-catalog");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!(field = %issue.field, "{}", issue.message),
            Severity::Warning => warn!(field = %issue.field, "{}", issue.message),
        }
    }

    // === Dependency Injection ===
    let providers =
        configured_providers(&config.provider_config(), cli.credentials_file.as_deref());
    let available = AggregateProvidersUseCase::new(providers).execute().await;

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format(&available),
        OutputFormat::Json => ConsoleFormatter::format_json(&available),
    };
    print!("{}", output);
    if cli.output == OutputFormat::Json {
        println!();
    }

    Ok(())
}
