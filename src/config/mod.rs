//! Configuration management for OrderFlow.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! OrderFlow uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ORDERFLOW_<SECTION>_<KEY>` overrides applied after parsing
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use orderflow::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("orderflow.toml")?;
//!
//! println!("Store backend: {:?}", config.store_backend);
//! println!("Export directory: {}", config.export.output_dir);
//! println!("Verification service: {}", config.verification.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "development"
//! store_backend = "postgresql"
//!
//! [application]
//! log_level = "info"
//!
//! [postgresql]
//! connection_string = "${ORDERFLOW_PG_CONNECTION_STRING}"
//! max_connections = 10
//!
//! [export]
//! output_dir = "exports"
//! file_prefix = "orders_type_A"
//!
//! [verification]
//! base_url = "https://verify.example.com"
//! api_token = "${ORDERFLOW_VERIFICATION_TOKEN}"
//! timeout_seconds = 30
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/orderflow"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, Environment, ExportConfig, FileStoreConfig, LoggingConfig,
    OrderFlowConfig, PostgreSQLConfig, StoreBackend, VerificationConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
