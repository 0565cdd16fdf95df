//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the cloud project id.
pub const ENV_PROJECT_ID: &str = "GOOGLE_CLOUD_PROJECT";

/// Environment variable holding the listen port.
pub const ENV_PORT: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML config file without validating it.
pub fn read_config_file(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Overlay environment values onto `config`.
///
/// `lookup` returns the value of a variable, if set. An unset or empty
/// `PORT` keeps the configured port.
pub fn apply_env<F>(config: &mut ServiceConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(project_id) = lookup(ENV_PROJECT_ID) {
        config.project_id = project_id;
    }

    match lookup(ENV_PORT).filter(|p| !p.is_empty()) {
        Some(port) => {
            config.listener.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_PORT,
                value: port.clone(),
            })?;
        }
        None => {
            tracing::warn!(port = config.listener.port, "PORT variable not set, using configured port");
        }
    }

    Ok(())
}

/// Overlay the environment onto a base config and validate the result.
///
/// The base usually comes from [`read_config_file`]; reading it separately
/// lets the caller set up logging before the overlay warns about `PORT`.
pub fn load_config<F>(mut config: ServiceConfig, lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    apply_env(&mut config, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
