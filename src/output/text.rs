//! Human-readable messages for steering and `current`.

use std::fmt::Write;

use crate::app::{Selection, Steered};
use crate::inspect::{CurrentReport, ProfileMatch};

/// Lines printed after a steering command.
pub fn render_steered(steered: &Steered) -> String {
    let mut out = String::new();
    if let Some(selection) = &steered.selection {
        out.push_str(&render_selection(selection));
        out.push('\n');
    }

    let ack = &steered.ack;
    let _ = writeln!(out, "Backend now -> {}:{}", ack.address, ack.port);
    if !ack.response.is_empty() {
        let _ = writeln!(out, "{}", ack.response);
    }
    out
}

/// `Selected fastest: ...` or `Selected by name="...": ...`
pub fn render_selection(selection: &Selection) -> String {
    let ep = &selection.endpoint;
    let lat = ep.latency_text().unwrap_or_else(|| "?".to_string());
    let port = ep.port.map(|p| p.to_string()).unwrap_or_else(|| "?".to_string());

    match &selection.policy.name_filter {
        Some(needle) => format!("Selected by name={needle:?}: {} (lat={lat}ms, port={port})", ep.name),
        None => format!("Selected fastest: {} (lat={lat}ms, port={port})", ep.name),
    }
}

/// The `current` report.
pub fn render_current(report: &CurrentReport) -> String {
    let state = &report.state;
    let mut out = String::new();

    let _ = writeln!(out, "Current backend:");
    let _ = writeln!(out, "  server: {}", report.server);
    let _ = writeln!(out, "  addr:   {}:{}", state.address, state.port);
    let _ = writeln!(out, "  state:  {}", state.admin_state);
    out.push('\n');

    match &report.profile {
        ProfileMatch::Found(ep) => {
            let _ = writeln!(out, "Profile:");
            let _ = writeln!(out, "  name:    {}", ep.name);
            let _ = writeln!(out, "  port:    {}", state.port);
            let _ = writeln!(
                out,
                "  latency: {} ms",
                ep.latency_text().unwrap_or_else(|| "?".to_string())
            );
            let _ = writeln!(out, "  status:  {}", ep.status_label());
        }
        ProfileMatch::NotFound { port } => {
            let _ = writeln!(out, "No matching profile for port {port}");
        }
        ProfileMatch::FeedFailed(reason) => {
            let _ = writeln!(out, "Failed to query health feed: {reason}");
        }
    }
    out
}
