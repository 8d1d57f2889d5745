//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "orderflow.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing OrderFlow configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set store_backend to 'file' or 'postgresql'");
                println!("  3. Put secrets in a .env file, for example:");
                println!("     - ORDERFLOW_POSTGRESQL_CONNECTION_STRING");
                println!("     - ORDERFLOW_VERIFICATION_API_TOKEN");
                println!("  4. Validate configuration: orderflow validate-config");
                println!("  5. Process orders: orderflow process --owner-id 1,2");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

/// Sample configuration written by `init`
pub fn sample_config() -> &'static str {
    r#"# OrderFlow Configuration File
# Order classification and processing pipeline

# Runtime environment (development, staging, production)
environment = "development"

# Order store backend (file or postgresql)
store_backend = "file"

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[file_store]
# JSON document of the form { "orders": [ ... ] }
path = "data/orders.json"

# [postgresql]
# connection_string = "${ORDERFLOW_PG_CONNECTION_STRING}"
# max_connections = 10
# connection_timeout_seconds = 30
# statement_timeout_seconds = 60
# table_name = "orders"

[export]
# Type A orders are written here, one CSV file per order
output_dir = "exports"
file_prefix = "orders_type_A"

[verification]
# Type B orders are checked against GET {base_url}/orders/{id}/verification
base_url = "http://localhost:8081"
# api_token = "${ORDERFLOW_VERIFICATION_TOKEN}"
timeout_seconds = 30
tls_verify = true

[logging]
local_enabled = true
local_path = "logs"
local_rotation = "daily"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_is_valid() {
        let config = parse_config(sample_config()).unwrap();
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_init_writes_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("orderflow.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
        assert_eq!(args.execute().await.unwrap(), 2);

        let forced = InitArgs {
            force: true,
            ..args
        };
        assert_eq!(forced.execute().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_init_write_failure() {
        let dir = TempDir::new().unwrap();
        let args = InitArgs {
            output: dir
                .path()
                .join("missing")
                .join("orderflow.toml")
                .to_string_lossy()
                .to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 5);
    }
}
