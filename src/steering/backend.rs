//! Two-step steering of a backend's sole server.

use std::sync::Arc;

use crate::config::TargetConfig;
use crate::control::{AdminState, ControlChannel, RuntimeCommand, ServerRef};
use crate::error::SteerResult;
use crate::inspect::StateInspector;
use crate::steering::verify::verify_state;

/// Acknowledgement of a completed steering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteerAck {
    pub server: ServerRef,
    pub address: String,
    pub port: u16,
    /// Response text of the address change; often empty.
    pub response: String,
}

/// Points one `<backend>/<server>` slot at a local port.
pub struct BackendSteering {
    channel: Arc<dyn ControlChannel>,
    server: ServerRef,
    address: String,
}

impl BackendSteering {
    pub fn new(channel: Arc<dyn ControlChannel>, server: ServerRef, address: impl Into<String>) -> Self {
        Self {
            channel,
            server,
            address: address.into(),
        }
    }

    /// Create a steering handle for the `[target]` configuration section.
    pub fn from_config(channel: Arc<dyn ControlChannel>, target: &TargetConfig) -> Self {
        Self::new(
            channel,
            ServerRef::new(&target.backend, &target.server),
            &target.address,
        )
    }

    pub fn server(&self) -> &ServerRef {
        &self.server
    }

    /// Set the server address to `<address>:<port>`, then force it ready.
    ///
    /// If the address change fails the state command is not sent. If the state
    /// command fails the address has already changed; running the same call
    /// again re-applies both steps.
    pub async fn steer(&self, port: u16) -> SteerResult<SteerAck> {
        let set_addr = RuntimeCommand::SetAddr {
            server: self.server.clone(),
            address: self.address.clone(),
            port,
        };
        let response = self.channel.send(&set_addr.to_string()).await?;
        tracing::info!(server = %self.server, addr = %self.address, port, "Server address updated");

        let set_ready = RuntimeCommand::SetState {
            server: self.server.clone(),
            state: AdminState::Ready,
        };
        if let Err(err) = self.channel.send(&set_ready.to_string()).await {
            tracing::warn!(
                server = %self.server,
                port,
                error = %err,
                "Address changed but server was not forced ready"
            );
            return Err(err.into());
        }
        tracing::info!(server = %self.server, "Server forced ready");

        Ok(SteerAck {
            server: self.server.clone(),
            address: self.address.clone(),
            port,
            response,
        })
    }

    /// [`steer`](Self::steer), then read the live state back and require it to
    /// match. A mismatch is reported, never rolled back.
    pub async fn steer_verified(&self, port: u16, inspector: &StateInspector) -> SteerResult<SteerAck> {
        let ack = self.steer(port).await?;
        let record = inspector.current_state().await?;
        verify_state(&record, &ack.address, ack.port)?;

        tracing::info!(server = %self.server, port, "Live state confirms steering");
        Ok(ack)
    }
}
