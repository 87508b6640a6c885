//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, buffer size > 0)
//! - Reject identifiers that cannot be spliced into a control command
//! - Reject log levels the subscriber would not understand
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SteerConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use url::Url;

use crate::config::schema::SteerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("feed.base_url {url:?} is not a valid http(s) URL")]
    InvalidFeedUrl { url: String },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must not contain whitespace: {value:?}")]
    Whitespace { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("observability.log_level {value:?} is not one of off, error, warn, info, debug, trace")]
    InvalidLogLevel { value: String },
}

/// Validate a fully layered configuration.
pub fn validate_config(config: &SteerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.feed.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidFeedUrl {
            url: config.feed.base_url.clone(),
        }),
    }

    if config.control.socket_path.is_empty() {
        errors.push(ValidationError::Empty { field: "control.socket_path" });
    }

    check_token(&mut errors, "target.backend", &config.target.backend);
    check_token(&mut errors, "target.server", &config.target.server);
    check_token(&mut errors, "target.address", &config.target.address);

    if config.feed.timeout_secs == 0 {
        errors.push(ValidationError::Zero { field: "feed.timeout_secs" });
    }
    if config.control.timeout_secs == 0 {
        errors.push(ValidationError::Zero { field: "control.timeout_secs" });
    }
    if config.control.max_response_bytes == 0 {
        errors.push(ValidationError::Zero { field: "control.max_response_bytes" });
    }

    if config.observability.log_level.trim().parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel {
            value: config.observability.log_level.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// Command arguments are space-delimited on the wire.
fn check_token(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.push(ValidationError::Empty { field });
    } else if value.chars().any(char::is_whitespace) {
        errors.push(ValidationError::Whitespace {
            field,
            value: value.to_string(),
        });
    }
}
