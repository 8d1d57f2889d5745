//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the OrderFlow configuration file.

use crate::config::load_config;
use crate::config::schema::StoreBackend;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Environment: {:?}", config.environment);
        println!("  Log Level: {}", config.application.log_level);

        match config.store_backend {
            StoreBackend::PostgreSQL => {
                if let Some(ref pg_config) = config.postgresql {
                    use secrecy::ExposeSecret;
                    println!("  Order Store: PostgreSQL");
                    println!(
                        "  PostgreSQL Connection: {}",
                        pg_config
                            .connection_string
                            .expose_secret()
                            .as_str()
                            .rsplit('@')
                            .next()
                            .unwrap_or("***")
                    );
                    println!("  Orders Table: {}", pg_config.table_name);
                    println!("  Max Connections: {}", pg_config.max_connections);
                }
            }
            StoreBackend::File => {
                if let Some(ref file_config) = config.file_store {
                    println!("  Order Store: File");
                    println!("  Orders File: {}", file_config.path);
                }
            }
        }

        println!("  Export Directory: {}", config.export.output_dir);
        println!("  Export Prefix: {}", config.export.file_prefix);
        println!("  Verification Service: {}", config.verification.base_url);
        println!(
            "  Verification Token: {}",
            if config.verification.api_token.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        println!("  Verification Timeout: {}s", config.verification.timeout_seconds);
        println!();
        Ok(0)
    }
}
