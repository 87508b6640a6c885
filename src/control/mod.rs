//! Control channel subsystem.
//!
//! # Data Flow
//! ```text
//! RuntimeCommand (command.rs)
//!     → rendered to one text line
//!     → socket.rs: connect → write line + '\n' → half-close → read to EOF → close
//!     → trimmed response text
//! ```
//!
//! # Design Decisions
//! - One command per connection; no pooling, no pipelining
//! - No retries: a connect or I/O failure surfaces immediately
//! - Every exchange is bounded by a timeout and a response size cap
//! - The channel is a trait so steering and inspection can run against fakes

pub mod command;
pub mod server;
pub mod socket;

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use command::RuntimeCommand;
pub use server::{AdminState, ServerRef};
pub use socket::UnixSocketChannel;

/// Failure of a single control channel exchange.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("cannot connect to control socket {path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("control socket I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("control socket did not answer within {timeout:?}")]
    Timeout { timeout: Duration },
}

/// A line-oriented request/response channel to the load balancer.
#[async_trait]
pub trait ControlChannel: Send + Sync {
    /// Send one command and return the trimmed response text.
    async fn send(&self, command: &str) -> Result<String, ChannelError>;
}
