//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - An empty project id is accepted; it only yields `projects//traces/...`
//! - Addresses are typed in the schema, so serde rejects malformed ones

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem with a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
