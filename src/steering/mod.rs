//! Backend steering subsystem.
//!
//! # Data Flow
//! ```text
//! chosen port
//!     → set server <backend>/<server> addr <address> port <port>
//!     → set server <backend>/<server> state ready
//!     → (optional) show servers state <backend> → verify.rs
//! ```
//!
//! # Design Decisions
//! - The two commands form one logical operation, but the protocol has no
//!   transactions: traffic can move before the ready command lands
//! - A failed first step is fatal and the second step is skipped
//! - No rollback; recovery is re-running the whole operation, which is idempotent

pub mod backend;
pub mod verify;

pub use backend::{BackendSteering, SteerAck};
