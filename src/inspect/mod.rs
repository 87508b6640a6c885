//! State inspection subsystem.
//!
//! # Data Flow
//! ```text
//! show servers state <backend>
//!     → control channel round trip
//!     → parser.rs (header line + first row → column map)
//!     → record.rs (ServerStateRecord: addr, port, admin state)
//!     → inspector.rs (optional enrichment from a fresh feed snapshot)
//! ```
//!
//! # Design Decisions
//! - Strictly read-only; only the `show` command is ever sent
//! - A missing header or data row is an error, a missing column is a placeholder
//! - Enrichment failures degrade the report instead of aborting it

pub mod inspector;
pub mod parser;
pub mod record;

pub use inspector::{CurrentReport, ProfileMatch, StateInspector};
pub use record::ServerStateRecord;
