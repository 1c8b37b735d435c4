//! Main entry point for the ipquery-rs CLI tool

use clap::Parser;
use ipquery::cli::Cli;
use ipquery::{AppConfig, Result};
use log::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration; a user-supplied file must exist and parse
    let mut config = match cli.load_config() {
        Ok(config) => config,
        Err(e) if cli.config.is_none() => {
            eprintln!("Warning: Failed to load config: {}, using defaults", e);
            AppConfig::default()
        }
        Err(e) => return Err(e),
    };
    cli.apply_to(&mut config);

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.default_log_filter()))
        .init();

    info!("Starting ipquery-rs v{}", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = config.global.config_path {
        debug!("Loaded config from {}", path.display());
    }

    // Execute CLI logic
    cli.run(config).await?;

    Ok(())
}
