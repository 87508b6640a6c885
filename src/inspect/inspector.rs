//! Read-only view of the steered server.

use std::sync::Arc;

use crate::control::{ControlChannel, RuntimeCommand, ServerRef};
use crate::error::SteerResult;
use crate::feed::{Endpoint, EndpointSource};
use crate::inspect::record::ServerStateRecord;

/// Outcome of looking up the live port in the health feed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileMatch {
    /// First endpoint whose port equals the live port.
    Found(Endpoint),
    /// The feed answered but no endpoint uses this port.
    NotFound { port: String },
    /// The feed could not be queried; the text says why.
    FeedFailed(String),
}

/// Everything `current` prints.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReport {
    pub server: ServerRef,
    pub state: ServerStateRecord,
    pub profile: ProfileMatch,
}

/// Queries the live server state table. Never issues a mutating command.
pub struct StateInspector {
    channel: Arc<dyn ControlChannel>,
    server: ServerRef,
}

impl StateInspector {
    pub fn new(channel: Arc<dyn ControlChannel>, server: ServerRef) -> Self {
        Self { channel, server }
    }

    /// Fetch and parse the live state of the backend's server.
    pub async fn current_state(&self) -> SteerResult<ServerStateRecord> {
        let command = RuntimeCommand::ShowServersState {
            backend: self.server.backend.clone(),
        };
        let response = self.channel.send(&command.to_string()).await?;
        let record = ServerStateRecord::parse(&response)?;

        // Only the first row is read; it should be the configured server.
        if let Some(name) = record.server_name().filter(|name| *name != self.server.server) {
            tracing::warn!(
                server = %self.server,
                reported = name,
                "State dump's first row belongs to a different server"
            );
        }

        tracing::debug!(
            server = %self.server,
            addr = %record.address,
            port = %record.port,
            state = %record.admin_state,
            "Live server state"
        );
        Ok(record)
    }

    /// Live state plus the matching health feed profile.
    ///
    /// Only the state query can fail this call; a feed failure is folded into
    /// [`ProfileMatch::FeedFailed`].
    pub async fn report(&self, source: &dyn EndpointSource) -> SteerResult<CurrentReport> {
        let state = self.current_state().await?;
        let profile = enrich(source, &state.port).await;

        Ok(CurrentReport {
            server: self.server.clone(),
            state,
            profile,
        })
    }
}

/// Look up `port` in a fresh feed snapshot.
pub async fn enrich(source: &dyn EndpointSource, port: &str) -> ProfileMatch {
    match source.fetch_endpoints().await {
        Ok(endpoints) => match find_by_port(&endpoints, port) {
            Some(endpoint) => ProfileMatch::Found(endpoint.clone()),
            None => ProfileMatch::NotFound {
                port: port.to_string(),
            },
        },
        Err(err) => {
            tracing::warn!(error = %err, "Health feed query failed during enrichment");
            ProfileMatch::FeedFailed(err.to_string())
        }
    }
}

/// First endpoint whose port, written in decimal, equals `port`.
pub fn find_by_port<'a>(endpoints: &'a [Endpoint], port: &str) -> Option<&'a Endpoint> {
    endpoints
        .iter()
        .find(|ep| ep.port.is_some_and(|p| p.to_string() == port))
}
