//! Error definitions shared by every subsystem.

use thiserror::Error;

use crate::config::ConfigError;
use crate::control::ChannelError;

/// Result alias used across the crate.
pub type SteerResult<T> = Result<T, SteerError>;

/// Everything that can end an invocation.
///
/// None of these are retried. The only place an error is downgraded instead of
/// propagated is the profile enrichment of the `current` report.
#[derive(Debug, Error)]
pub enum SteerError {
    /// Transport or HTTP failure, or an undecodable body, from the health feed.
    #[error("health feed unavailable: {0}")]
    FeedUnavailable(String),

    /// The health feed answered but reported `success != true`.
    #[error("health feed rejected the query: {0}")]
    FeedRejected(String),

    /// The name filter left no candidates.
    #[error("no endpoints match {}", describe_filter(.filter))]
    NoMatch { filter: Option<String> },

    /// The chosen endpoint cannot be steered to.
    #[error("selected endpoint {name:?} has no usable port")]
    InvalidCandidate { name: String },

    /// Control channel connect/write/read failure.
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// The live state dump lacks the expected header/row structure.
    #[error("cannot parse server state: {0}")]
    UnparsableState(String),

    /// The live state read after steering disagrees with what was set.
    #[error("post-steer verification failed: {0}")]
    VerificationFailed(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn describe_filter(filter: &Option<String>) -> String {
    match filter {
        Some(needle) => format!("{needle:?}"),
        None => "(no filter)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_message() {
        let err = SteerError::NoMatch { filter: Some("tokyo".into()) };
        assert_eq!(err.to_string(), "no endpoints match \"tokyo\"");

        let err = SteerError::NoMatch { filter: None };
        assert_eq!(err.to_string(), "no endpoints match (no filter)");
    }
}
