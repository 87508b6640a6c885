//! Health feed subsystem.
//!
//! # Data Flow
//! ```text
//! GET <base>/api/v1/proxies
//!     → client.rs (timeout, HTTP status check)
//!     → types.rs (envelope + lenient per-endpoint decoding)
//!     → Vec<Endpoint> (immutable snapshot for this invocation)
//! ```
//!
//! # Design Decisions
//! - Fetched fresh on every invocation; nothing is cached
//! - `success != true` is a rejection, distinct from transport failures
//! - Exposed through `EndpointSource` so callers can substitute a fake

pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::error::SteerResult;

pub use client::HttpFeedClient;
pub use types::Endpoint;

/// Source of the current endpoint list.
#[async_trait]
pub trait EndpointSource: Send + Sync {
    /// Fetch a fresh snapshot of all endpoints.
    async fn fetch_endpoints(&self) -> SteerResult<Vec<Endpoint>>;
}
