//! Upstream proxy steering library.
//!
//! Picks one endpoint from a health feed and points a load balancer backend
//! slot at it over the load balancer's administrative socket.

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod feed;
pub mod inspect;
pub mod observability;
pub mod output;
pub mod selector;
pub mod steering;

pub use app::App;
pub use config::SteerConfig;
pub use error::{SteerError, SteerResult};
