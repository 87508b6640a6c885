//! Runtime commands understood by the administrative socket.

use std::fmt;

use crate::control::server::{AdminState, ServerRef};

/// One line of the administrative protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCommand {
    /// `set server <backend>/<server> addr <ip> port <port>`
    SetAddr {
        server: ServerRef,
        address: String,
        port: u16,
    },
    /// `set server <backend>/<server> state <state>`
    SetState { server: ServerRef, state: AdminState },
    /// `show servers state <backend>`
    ShowServersState { backend: String },
}

impl fmt::Display for RuntimeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeCommand::SetAddr { server, address, port } => {
                write!(f, "set server {server} addr {address} port {port}")
            }
            RuntimeCommand::SetState { server, state } => {
                write!(f, "set server {server} state {state}")
            }
            RuntimeCommand::ShowServersState { backend } => {
                write!(f, "show servers state {backend}")
            }
        }
    }
}
