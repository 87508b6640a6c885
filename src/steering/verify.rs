//! Post-condition check after steering.

use crate::control::AdminState;
use crate::error::{SteerError, SteerResult};
use crate::inspect::ServerStateRecord;

/// Require the live record to show `<address>:<port>` in the ready state.
pub fn verify_state(record: &ServerStateRecord, address: &str, port: u16) -> SteerResult<()> {
    let mut problems = Vec::new();

    if record.address != address {
        problems.push(format!("addr is {} (expected {address})", record.address));
    }
    if record.port_number() != Some(port) {
        problems.push(format!("port is {} (expected {port})", record.port));
    }
    if record.admin_state != AdminState::Ready {
        problems.push(format!("state is {} (expected ready)", record.admin_state));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(SteerError::VerificationFailed(problems.join(", ")))
    }
}
