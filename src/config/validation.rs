//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.name must not contain whitespace, got '{0}'")]
    InvalidServerName(String),
    #[error("server.version must not contain whitespace, got '{0}'")]
    InvalidVersion(String),
    #[error("delivery.queue_capacity must be greater than zero")]
    ZeroQueueCapacity,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // The name and version are single protocol tokens in the registration burst
    let name = &config.server.name;
    if name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    } else if name.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidServerName(name.clone()));
    }

    let version = &config.server.version;
    if version.is_empty() || version.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidVersion(version.clone()));
    }

    // tokio's bounded channel panics on zero capacity
    if config.delivery.queue_capacity == 0 {
        errors.push(ValidationError::ZeroQueueCapacity);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
