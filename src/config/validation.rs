//! Configuration validation.
//!
//! Serde handles the syntactic checks; this module checks values that parse
//! but cannot work (unparseable addresses, empty pools, zero limits).
//! All errors are returned, not just the first.

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("database.url must not be empty")]
    EmptyDatabaseUrl,

    #[error("database.url `{0}` uses an unsupported scheme (expected mysql:// or sqlite:)")]
    UnsupportedDatabase(String),

    #[error("database.max_connections must be at least 1")]
    EmptyPool,

    #[error("in-memory sqlite requires database.max_connections = 1")]
    SharedMemoryPool,

    #[error("http.max_body_bytes must be greater than 0")]
    ZeroBodyLimit,

    #[error("http.request_timeout_secs must be greater than 0 when set")]
    ZeroTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let url = config.database.url.trim();
    if url.is_empty() {
        errors.push(ValidationError::EmptyDatabaseUrl);
    } else if !(url.starts_with("mysql:") || url.starts_with("sqlite:")) {
        errors.push(ValidationError::UnsupportedDatabase(url.to_string()));
    }

    if config.database.max_connections == 0 {
        errors.push(ValidationError::EmptyPool);
    } else if url.contains(":memory:") && config.database.max_connections > 1 {
        // Every pooled connection would open its own private database.
        errors.push(ValidationError::SharedMemoryPool);
    }

    if config.http.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.http.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "nowhere".into();
        config.database.url = "postgres://localhost/db".into();
        config.database.max_connections = 0;
        config.http.request_timeout_secs = Some(0);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::BindAddress("nowhere".into())));
        assert!(errors.contains(&ValidationError::EmptyPool));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
    }

    #[test]
    fn test_memory_sqlite_needs_single_connection() {
        let mut config = ServiceConfig::default();
        config.database.url = "sqlite::memory:".into();
        config.database.max_connections = 4;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::SharedMemoryPool]
        );

        config.database.max_connections = 1;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
