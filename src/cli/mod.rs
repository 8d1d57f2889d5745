//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for OrderFlow using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// OrderFlow - order classification pipeline
#[derive(Parser, Debug)]
#[command(name = "orderflow")]
#[command(version, about, long_about = None)]
#[command(author = "OrderFlow Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "orderflow.toml", env = "ORDERFLOW_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ORDERFLOW_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process the orders of one or more owners
    Process(commands::process::ProcessArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Run the selected command and return its exit code
    pub async fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Process(args) => args.execute(&self.config).await,
            Commands::ValidateConfig(args) => args.execute(&self.config).await,
            Commands::Init(args) => args.execute().await,
        }
    }
}
