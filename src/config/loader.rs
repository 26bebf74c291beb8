//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides `listener.bind_address`.
pub const ENV_BIND: &str = "LISTA_SUPER_BIND";
/// Overrides `database.url`.
pub const ENV_DATABASE_URL: &str = "LISTA_SUPER_DATABASE_URL";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

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

/// Load and validate configuration from a TOML file, then apply env overrides.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServiceConfig = toml::from_str(&content)?;
    finish(config, |key| std::env::var(key).ok())
}

/// Defaults plus env overrides, for running without a config file.
pub fn default_config() -> Result<ServiceConfig, ConfigError> {
    finish(ServiceConfig::default(), |key| std::env::var(key).ok())
}

fn finish<F>(mut config: ServiceConfig, env: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    apply_env_overrides(&mut config, env);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides using the given lookup.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(bind) = env(ENV_BIND).filter(|v| !v.is_empty()) {
        config.listener.bind_address = bind;
    }
    if let Some(url) = env(ENV_DATABASE_URL).filter(|v| !v.is_empty()) {
        config.database.url = url;
    }
}
