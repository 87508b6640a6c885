//! Candidate filtering.

use crate::feed::Endpoint;

/// Which endpoints are eligible for selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Case-insensitive substring the endpoint name must contain.
    pub name_filter: Option<String>,
}

impl SelectionPolicy {
    /// Every endpoint is a candidate.
    pub fn fastest() -> Self {
        Self::default()
    }

    /// Only endpoints whose name contains `needle` (ignoring case).
    pub fn by_name(needle: impl Into<String>) -> Self {
        Self {
            name_filter: Some(needle.into()),
        }
    }

    /// Returns true if `endpoint` passes the name filter.
    pub fn matches(&self, endpoint: &Endpoint) -> bool {
        match &self.name_filter {
            None => true,
            Some(needle) => endpoint
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}
