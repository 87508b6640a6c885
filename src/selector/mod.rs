//! Endpoint selection.
//!
//! # Data Flow
//! ```text
//! Vec<Endpoint> + SelectionPolicy
//!     → policy.rs (name filter; empty → NoMatch)
//!     → prefer online subset, else keep the whole filtered set
//!     → ranking.rs (lowest latency, missing = +inf, first wins ties)
//!     → head must carry a port (else InvalidCandidate)
//!     → Candidate { endpoint, port }
//! ```
//!
//! # Design Decisions
//! - Pure: no I/O, input is borrowed and never mutated
//! - Deterministic for identical input and policy
//! - "Best available" when nothing is online instead of failing

pub mod policy;
pub mod ranking;

use crate::error::{SteerError, SteerResult};
use crate::feed::Endpoint;

pub use policy::SelectionPolicy;

/// The chosen endpoint together with its port, known to be present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub endpoint: &'a Endpoint,
    pub port: u16,
}

/// Pick exactly one endpoint from `endpoints` under `policy`.
pub fn select<'a>(endpoints: &'a [Endpoint], policy: &SelectionPolicy) -> SteerResult<Candidate<'a>> {
    let filtered: Vec<&Endpoint> = endpoints.iter().filter(|ep| policy.matches(ep)).collect();
    if filtered.is_empty() {
        return Err(SteerError::NoMatch {
            filter: policy.name_filter.clone(),
        });
    }

    let online: Vec<&Endpoint> = filtered.iter().copied().filter(|ep| ep.online).collect();
    let candidates = if online.is_empty() {
        tracing::debug!(candidates = filtered.len(), "No candidate online, ranking all");
        filtered
    } else {
        online
    };

    let best = ranking::fastest(candidates.iter().copied()).ok_or_else(|| SteerError::NoMatch {
        filter: policy.name_filter.clone(),
    })?;

    let Some(port) = best.port else {
        return Err(SteerError::InvalidCandidate {
            name: best.name.clone(),
        });
    };

    tracing::debug!(
        name = %best.name,
        port,
        latency_ms = ?best.latency_ms,
        online = best.online,
        "Endpoint selected"
    );
    Ok(Candidate { endpoint: best, port })
}
