//! Typed view of one server's live state.

use crate::control::AdminState;
use crate::error::SteerResult;
use crate::inspect::parser::{parse_state_fields, StateFields};

/// Shown for a column the dump did not include.
pub const PLACEHOLDER: &str = "?";

/// Live state of one server as reported by the load balancer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStateRecord {
    /// `srv_addr`
    pub address: String,
    /// `srv_port`, kept as text so it can be compared against feed ports verbatim.
    pub port: String,
    /// `srv_admin_state` mapped through the known code table.
    pub admin_state: AdminState,
    /// Every column of the row, for diagnostics.
    pub fields: StateFields,
}

impl ServerStateRecord {
    /// Parse a `show servers state` response.
    pub fn parse(response: &str) -> SteerResult<Self> {
        Ok(Self::from_fields(parse_state_fields(response)?))
    }

    /// Build the record from an already parsed row.
    pub fn from_fields(fields: StateFields) -> Self {
        let get = |column: &str| {
            fields
                .get(column)
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        };

        let address = get("srv_addr");
        let port = get("srv_port");
        let admin_state = AdminState::from_code(&get("srv_admin_state"));

        Self {
            address,
            port,
            admin_state,
            fields,
        }
    }

    /// `srv_name`, when the dump carries that column.
    pub fn server_name(&self) -> Option<&str> {
        self.fields.get("srv_name").map(String::as_str)
    }

    /// The port as a number, when the dump carried a valid one.
    pub fn port_number(&self) -> Option<u16> {
        self.port.parse().ok()
    }
}
