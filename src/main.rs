use anyhow::{Context, Result};
use clap::Parser;
use resume_client::core::{ClientConfig, ConfigManager};
use resume_client::resume_cli::{handle_resume_command, ResumeCli};
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = ResumeCli::parse();
    let config = ConfigManager::load(cli.overrides())?;

    init_logging(&config)?;

    info!("Loaded configuration for environment: {}", config.environment);
    info!("Resume service URL: {}", config.service_url);
    info!("Output directory: {}", config.output_dir.display());

    handle_resume_command(cli, &config).await
}

fn init_logging(config: &ClientConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}
