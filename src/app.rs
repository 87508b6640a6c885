//! Command orchestration.
//!
//! Wires the feed, selector, steering and inspector together for each
//! command-line operation. Every method is a one-shot: one feed fetch at most,
//! and control commands strictly one after another.

use std::sync::Arc;

use crate::config::SteerConfig;
use crate::control::{ControlChannel, UnixSocketChannel};
use crate::error::SteerResult;
use crate::feed::{Endpoint, EndpointSource, HttpFeedClient};
use crate::inspect::{CurrentReport, StateInspector};
use crate::selector::{self, SelectionPolicy};
use crate::steering::{BackendSteering, SteerAck};

/// The endpoint chosen for a steering command.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub policy: SelectionPolicy,
    pub endpoint: Endpoint,
}

/// Result of a steering command.
#[derive(Debug, Clone, PartialEq)]
pub struct Steered {
    /// Absent when the port was given literally.
    pub selection: Option<Selection>,
    pub ack: SteerAck,
}

pub struct App {
    source: Arc<dyn EndpointSource>,
    steering: BackendSteering,
    inspector: StateInspector,
}

impl App {
    /// Build the production wiring: HTTP feed and stream-socket control channel.
    pub fn new(config: &SteerConfig) -> SteerResult<Self> {
        let source: Arc<dyn EndpointSource> = Arc::new(HttpFeedClient::new(&config.feed)?);
        let channel: Arc<dyn ControlChannel> = Arc::new(UnixSocketChannel::from_config(&config.control));
        Ok(Self::with_parts(config, source, channel))
    }

    /// Build with caller-supplied capabilities.
    pub fn with_parts(
        config: &SteerConfig,
        source: Arc<dyn EndpointSource>,
        channel: Arc<dyn ControlChannel>,
    ) -> Self {
        let steering = BackendSteering::from_config(channel.clone(), &config.target);
        let inspector = StateInspector::new(channel, steering.server().clone());
        Self {
            source,
            steering,
            inspector,
        }
    }

    /// `list`
    pub async fn list(&self) -> SteerResult<Vec<Endpoint>> {
        self.source.fetch_endpoints().await
    }

    /// `set-port <port>`
    pub async fn steer_port(&self, port: u16, verify: bool) -> SteerResult<Steered> {
        let ack = self.apply(port, verify).await?;
        Ok(Steered { selection: None, ack })
    }

    /// `set-name <substring>` and `fastest`
    pub async fn steer_best(&self, policy: SelectionPolicy, verify: bool) -> SteerResult<Steered> {
        let endpoints = self.source.fetch_endpoints().await?;
        let candidate = selector::select(&endpoints, &policy)?;
        let ack = self.apply(candidate.port, verify).await?;

        Ok(Steered {
            selection: Some(Selection {
                policy,
                endpoint: candidate.endpoint.clone(),
            }),
            ack,
        })
    }

    /// `current`
    pub async fn current(&self) -> SteerResult<CurrentReport> {
        self.inspector.report(self.source.as_ref()).await
    }

    async fn apply(&self, port: u16, verify: bool) -> SteerResult<SteerAck> {
        if verify {
            self.steering.steer_verified(port, &self.inspector).await
        } else {
            self.steering.steer(port).await
        }
    }
}
