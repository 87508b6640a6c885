//! Stream-socket transport for the administrative protocol.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time;

use crate::config::ControlConfig;
use crate::control::{ChannelError, ControlChannel};

/// Control channel over a local stream socket.
#[derive(Debug, Clone)]
pub struct UnixSocketChannel {
    path: PathBuf,
    timeout: Duration,
    max_response_bytes: usize,
}

impl UnixSocketChannel {
    /// Create a channel for the socket at `path`.
    pub fn new(path: impl Into<PathBuf>, timeout: Duration, max_response_bytes: usize) -> Self {
        Self {
            path: path.into(),
            timeout,
            max_response_bytes,
        }
    }

    /// Create a channel from the `[control]` configuration section.
    pub fn from_config(config: &ControlConfig) -> Self {
        Self::new(
            &config.socket_path,
            Duration::from_secs(config.timeout_secs),
            config.max_response_bytes,
        )
    }

    async fn exchange(&self, command: &str) -> Result<String, ChannelError> {
        let mut stream = UnixStream::connect(&self.path)
            .await
            .map_err(|source| ChannelError::Connect {
                path: self.path.display().to_string(),
                source,
            })?;

        let line = format!("{}\n", command.trim());
        stream.write_all(line.as_bytes()).await?;
        // Half-close so the peer sees the end of the command.
        stream.shutdown().await?;

        let mut buf = Vec::new();
        (&mut stream)
            .take(self.max_response_bytes as u64)
            .read_to_end(&mut buf)
            .await?;

        if buf.len() >= self.max_response_bytes {
            tracing::warn!(
                limit = self.max_response_bytes,
                "Control socket response truncated at size limit"
            );
        }

        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }
}

#[async_trait]
impl ControlChannel for UnixSocketChannel {
    async fn send(&self, command: &str) -> Result<String, ChannelError> {
        tracing::debug!(
            socket = %self.path.display(),
            command = %command.trim(),
            "Sending control command"
        );

        let response = match time::timeout(self.timeout, self.exchange(command)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(ChannelError::Timeout {
                    timeout: self.timeout,
                })
            }
        };

        tracing::debug!(bytes = response.len(), "Control command answered");
        Ok(response)
    }
}
