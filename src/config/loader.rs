//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const PORT_ENV_VAR: &str = "PORT";
pub const RPC_URL_ENV_VAR: &str = "ETHERS_PROVIDER_URL";
pub const DESTINATION_ENV_VAR: &str = "SWEEP_DESTINATION_ADDRESS";
pub const EXPLORER_URL_ENV_VAR: &str = "SWEEP_EXPLORER_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: &'static str, message: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, message } => write!(f, "Environment variable {}: {}", var, message),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from an optional TOML file, then the process environment.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an explicit environment lookup.
pub fn load_config_with<F>(path: Option<&Path>, env: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, env)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment variables on top of file/default values.
///
/// Empty values are treated as unset.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(port) = lookup(PORT_ENV_VAR) {
        config.server.port = port.parse().map_err(|e| ConfigError::Env {
            var: PORT_ENV_VAR,
            message: format!("'{}' is not a valid port: {}", port, e),
        })?;
    }
    if let Some(url) = lookup(RPC_URL_ENV_VAR) {
        config.blockchain.rpc_url = url;
    }
    if let Some(dest) = lookup(DESTINATION_ENV_VAR) {
        config.sweep.destination_address = Some(dest);
    }
    if let Some(url) = lookup(EXPLORER_URL_ENV_VAR) {
        config.sweep.explorer_url = url;
    }

    Ok(())
}
