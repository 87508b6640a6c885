//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SteerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `feed.base_url`.
pub const ENV_FEED_URL: &str = "XRAY_API";
/// Environment variable overriding `control.socket_path`.
pub const ENV_SOCKET_PATH: &str = "HAPROXY_SOCKET";
/// Environment variable overriding `target.backend`.
pub const ENV_BACKEND: &str = "HAPROXY_BACKEND";
/// Environment variable overriding `target.server`.
pub const ENV_SERVER: &str = "HAPROXY_SERVER";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load a TOML configuration file without validating it.
pub fn load_file(path: &Path) -> Result<SteerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply environment overrides on top of `config`.
///
/// `lookup` abstracts `std::env::var` so callers and tests can supply their own
/// environment. Empty values are treated as unset.
pub fn apply_env_overrides<F>(config: &mut SteerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_FEED_URL) {
        config.feed.base_url = url;
    }
    if let Some(path) = get(ENV_SOCKET_PATH) {
        config.control.socket_path = path;
    }
    if let Some(backend) = get(ENV_BACKEND) {
        config.target.backend = backend;
    }
    if let Some(server) = get(ENV_SERVER) {
        config.target.server = server;
    }
}

/// Build the effective configuration: defaults, then the optional file, then
/// the environment, then validation.
pub fn load_config<F>(path: Option<&Path>, lookup: F) -> Result<SteerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => SteerConfig::default(),
    };
    apply_env_overrides(&mut config, lookup);

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        feed = %config.feed.base_url,
        socket = %config.control.socket_path,
        backend = %config.target.backend,
        server = %config.target.server,
        "Configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = load_config(None, env(&[])).unwrap();
        assert_eq!(config, SteerConfig::default());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = load_config(
            None,
            env(&[
                (ENV_FEED_URL, "http://10.0.0.2:2112"),
                (ENV_SOCKET_PATH, "/tmp/lb.sock"),
                (ENV_BACKEND, "b_web"),
                (ENV_SERVER, ""),
            ]),
        )
        .unwrap();

        assert_eq!(config.feed.base_url, "http://10.0.0.2:2112");
        assert_eq!(config.control.socket_path, "/tmp/lb.sock");
        assert_eq!(config.target.backend, "b_web");
        // Empty value leaves the default in place
        assert_eq!(config.target.server, "s1");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[feed]
base_url = "http://from-file:2112"
timeout_secs = 3

[control]
socket_path = "/run/from-file.sock"
"#
        )
        .unwrap();

        let config = load_config(
            Some(file.path()),
            env(&[(ENV_SOCKET_PATH, "/run/from-env.sock")]),
        )
        .unwrap();

        assert_eq!(config.feed.base_url, "http://from-file:2112");
        assert_eq!(config.feed.timeout_secs, 3);
        assert_eq!(config.control.socket_path, "/run/from-env.sock");
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/steer.toml")), env(&[]));
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[feed\nbase_url = ").unwrap();

        let result = load_config(Some(file.path()), env(&[]));
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_runs_after_env() {
        let result = load_config(None, env(&[(ENV_FEED_URL, "not a url")]));
        match result.unwrap_err() {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }
}
