//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the steering tool.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the steering tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SteerConfig {
    /// Health feed settings (endpoint list source).
    pub feed: FeedConfig,

    /// Load balancer administrative socket settings.
    pub control: ControlConfig,

    /// The backend slot being steered.
    pub target: TargetConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Health feed configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    /// Base URL of the health/latency service (e.g., "http://127.0.0.1:2112").
    pub base_url: String,

    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:2112".to_string(),
            timeout_secs: 10,
        }
    }
}

impl FeedConfig {
    /// Full URL of the endpoint list resource.
    pub fn endpoints_url(&self) -> String {
        format!("{}/api/v1/proxies", self.base_url.trim_end_matches('/'))
    }
}

/// Control channel configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ControlConfig {
    /// Filesystem path of the load balancer's stream socket.
    pub socket_path: String,

    /// Bound on connect, write and read of a single exchange, in seconds.
    pub timeout_secs: u64,

    /// Maximum number of response bytes read per command.
    pub max_response_bytes: usize,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            socket_path: "/var/run/haproxy.sock".to_string(),
            timeout_secs: 5,
            max_response_bytes: 65_535,
        }
    }
}

/// Backend slot configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TargetConfig {
    /// Backend identifier inside the load balancer.
    pub backend: String,

    /// Server identifier inside the backend (the sole steered server).
    pub server: String,

    /// Address the chosen endpoint port is reachable on.
    pub address: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            backend: "b_socks".to_string(),
            server: "s1".to_string(),
            address: "127.0.0.1".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
