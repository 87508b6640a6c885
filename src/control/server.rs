//! Load balancer server identifiers and administrative states.

use std::fmt;

/// A `<backend>/<server>` slot inside the load balancer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerRef {
    pub backend: String,
    pub server: String,
}

impl ServerRef {
    pub fn new(backend: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            server: server.into(),
        }
    }
}

impl fmt::Display for ServerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.backend, self.server)
    }
}

/// Administrative state of a server.
///
/// The state dump reports it as a numeric code. Codes outside the known table
/// are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminState {
    Ready,
    Drain,
    Maint,
    Other(String),
}

impl AdminState {
    /// Map a `srv_admin_state` code from the state dump.
    pub fn from_code(code: &str) -> Self {
        match code {
            "0" => AdminState::Ready,
            "1" => AdminState::Drain,
            "2" => AdminState::Maint,
            other => AdminState::Other(other.to_string()),
        }
    }

    /// Keyword used on the wire (`set server ... state <keyword>`) and in reports.
    pub fn as_str(&self) -> &str {
        match self {
            AdminState::Ready => "ready",
            AdminState::Drain => "drain",
            AdminState::Maint => "maint",
            AdminState::Other(code) => code,
        }
    }
}

impl fmt::Display for AdminState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
