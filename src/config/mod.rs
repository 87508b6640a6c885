//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → optional TOML file (loader.rs)
//!     → environment overrides (XRAY_API, HAPROXY_SOCKET, ...)
//!     → validation.rs (semantic checks)
//!     → SteerConfig (validated, immutable)
//!     → passed by value/reference into each component
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; each invocation loads it fresh
//! - All fields have defaults to allow running with no config at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ControlConfig, FeedConfig, ObservabilityConfig, SteerConfig, TargetConfig};
pub use validation::ValidationError;
