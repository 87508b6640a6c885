//! Rendering of command results for the terminal.

pub mod table;
pub mod text;

pub use table::render_endpoint_table;
pub use text::{render_current, render_selection, render_steered};
