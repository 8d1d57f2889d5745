//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{
    Environment, FileStoreConfig, OrderFlowConfig, PostgreSQLConfig, StoreBackend,
};
use super::secret::secret_string;
use crate::domain::errors::OrderFlowError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix of environment variables that override file values
pub const ENV_PREFIX: &str = "ORDERFLOW";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into OrderFlowConfig
/// 4. Applies environment variable overrides (ORDERFLOW_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if:
/// - File cannot be read
/// - A referenced environment variable is not set
/// - TOML parsing fails
/// - An override has an unparseable value
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use orderflow::config::load_config;
///
/// let config = load_config("orderflow.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<OrderFlowConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OrderFlowError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        OrderFlowError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut config = parse_config(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        OrderFlowError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Parses TOML text after `${VAR}` substitution, without overrides or validation
///
/// # Errors
///
/// Returns a configuration error on missing variables or malformed TOML.
pub fn parse_config(contents: &str) -> Result<OrderFlowConfig> {
    let contents = substitute_env_vars(contents)?;
    let config: OrderFlowConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched so documented placeholders do not
/// have to be set.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| OrderFlowError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(OrderFlowError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

fn parse_override<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        OrderFlowError::Configuration(format!(
            "Invalid value '{value}' for {ENV_PREFIX}_{key}: {e}"
        ))
    })
}

/// Applies environment variable overrides using the ORDERFLOW_* prefix
///
/// Variables follow the pattern ORDERFLOW_<SECTION>_<KEY>, for example
/// ORDERFLOW_VERIFICATION_BASE_URL. Store sections are created on demand when
/// their required key is supplied.
fn apply_env_overrides(config: &mut OrderFlowConfig) -> Result<()> {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_override("ENVIRONMENT") {
        config.environment = parse_override::<TomlEnum<Environment>>("ENVIRONMENT", &val)?.0;
    }
    if let Some(val) = env_override("STORE_BACKEND") {
        config.store_backend = parse_override::<TomlEnum<StoreBackend>>("STORE_BACKEND", &val)?.0;
    }

    // PostgreSQL overrides
    if let Some(val) = env_override("POSTGRESQL_CONNECTION_STRING") {
        match config.postgresql {
            Some(ref mut pg) => pg.connection_string = secret_string(val),
            None => config.postgresql = Some(PostgreSQLConfig::new(secret_string(val))),
        }
    }
    if let Some(ref mut pg) = config.postgresql {
        if let Some(val) = env_override("POSTGRESQL_MAX_CONNECTIONS") {
            pg.max_connections = parse_override("POSTGRESQL_MAX_CONNECTIONS", &val)?;
        }
        if let Some(val) = env_override("POSTGRESQL_STATEMENT_TIMEOUT_SECONDS") {
            pg.statement_timeout_seconds =
                parse_override("POSTGRESQL_STATEMENT_TIMEOUT_SECONDS", &val)?;
        }
        if let Some(val) = env_override("POSTGRESQL_TABLE_NAME") {
            pg.table_name = val;
        }
    }

    // File store overrides
    if let Some(val) = env_override("FILE_STORE_PATH") {
        match config.file_store {
            Some(ref mut file_store) => file_store.path = val,
            None => config.file_store = Some(FileStoreConfig { path: val }),
        }
    }

    // Export overrides
    if let Some(val) = env_override("EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Some(val) = env_override("EXPORT_FILE_PREFIX") {
        config.export.file_prefix = val;
    }

    // Verification overrides
    if let Some(val) = env_override("VERIFICATION_BASE_URL") {
        config.verification.base_url = val;
    }
    if let Some(val) = env_override("VERIFICATION_API_TOKEN") {
        config.verification.api_token = Some(secret_string(val));
    }
    if let Some(val) = env_override("VERIFICATION_TIMEOUT_SECONDS") {
        config.verification.timeout_seconds = parse_override("VERIFICATION_TIMEOUT_SECONDS", &val)?;
    }
    if let Some(val) = env_override("VERIFICATION_TLS_VERIFY") {
        config.verification.tls_verify = parse_override("VERIFICATION_TLS_VERIFY", &val)?;
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

/// Parses a lowercase enum value the same way the TOML file would
struct TomlEnum<T>(T);

impl<T: serde::de::DeserializeOwned> FromStr for TomlEnum<T> {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        T::deserialize(serde::de::value::StrDeserializer::<serde::de::value::Error>::new(s))
            .map(TomlEnum)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FILE_CONFIG: &str = r#"
store_backend = "file"

[file_store]
path = "orders.json"

[verification]
base_url = "http://localhost:8081"
"#;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("ORDERFLOW_LOADER_TEST_TOKEN", "test_value");
        let input = "api_token = \"${ORDERFLOW_LOADER_TEST_TOKEN}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_token = \"test_value\"");
        std::env::remove_var("ORDERFLOW_LOADER_TEST_TOKEN");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let input = "api_token = \"${ORDERFLOW_LOADER_TEST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("ORDERFLOW_LOADER_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# token = \"${ORDERFLOW_LOADER_TEST_COMMENTED}\"\nkey = 1";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_toml_enum_parsing() {
        let env: TomlEnum<Environment> = "production".parse().unwrap();
        assert_eq!(env.0, Environment::Production);
        let backend: TomlEnum<StoreBackend> = "postgresql".parse().unwrap();
        assert_eq!(backend.0, StoreBackend::PostgreSQL);
        assert!("mongodb".parse::<TomlEnum<StoreBackend>>().is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-orderflow.toml");
        assert!(matches!(result, Err(OrderFlowError::Configuration(_))));
    }

    #[test]
    fn test_parse_config_defaults() {
        let config = parse_config(FILE_CONFIG).unwrap();
        assert_eq!(config.store_backend, StoreBackend::File);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.export.file_prefix, "orders_type_A");
        assert_eq!(config.verification.timeout_seconds, 30);
        assert!(config.verification.tls_verify);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(FILE_CONFIG.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.file_store.unwrap().path, "orders.json");
        assert_eq!(config.verification.base_url, "http://localhost:8081");
    }

    #[test]
    fn test_load_config_rejects_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"store_backend = [").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
