// OrderFlow - Order Classification Pipeline
// Copyright (c) 2025 OrderFlow Contributors
// Licensed under the MIT License

use clap::Parser;
use orderflow::cli::{Cli, Commands};
use orderflow::config::{load_config, LoggingConfig};
use orderflow::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let (log_level, logging_config) = logging_settings(&cli);
    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "OrderFlow - Order Classification Pipeline"
    );

    let exit_code = match cli.execute().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}

/// Log level and sinks for this run
///
/// `process` uses the configured file logging. Other commands, and a
/// configuration that fails to load, log to the console only; the command
/// itself reports the configuration error.
fn logging_settings(cli: &Cli) -> (String, LoggingConfig) {
    let cli_level = cli.log_level.clone();

    if let Commands::Process(_) = cli.command {
        if let Ok(config) = load_config(&cli.config) {
            return (
                cli_level.unwrap_or(config.application.log_level),
                config.logging,
            );
        }
    }

    (
        cli_level.unwrap_or_else(|| "info".to_string()),
        LoggingConfig::console_only(),
    )
}
