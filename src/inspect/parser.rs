//! Parser for the load balancer's tabular state dump.
//!
//! The dump looks like:
//!
//! ```text
//! 1
//! # be_id be_name srv_id srv_name srv_addr srv_op_state srv_admin_state ... srv_port ...
//! 3 b_socks 1 s1 127.0.0.1 2 0 ... 10001 ...
//! ```
//!
//! Only the first data row after the header is read.

use std::collections::BTreeMap;

use crate::error::{SteerError, SteerResult};

/// Marker that starts the column header line.
pub const HEADER_MARKER: char = '#';

/// Longest slice of a raw response quoted in a diagnostic.
const RESPONSE_EXCERPT_CHARS: usize = 300;

/// Column name → value for one row of the dump.
pub type StateFields = BTreeMap<String, String>;

/// Pair the header's column names with the tokens of the row right below it.
///
/// Tokens beyond the header's column count are dropped, as are columns the row
/// is too short to fill.
pub fn parse_state_fields(response: &str) -> SteerResult<StateFields> {
    let lines: Vec<&str> = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let header_idx = lines
        .iter()
        .position(|line| line.starts_with(HEADER_MARKER))
        .ok_or_else(|| {
            SteerError::UnparsableState(format!("no header line in response: {}", excerpt(response)))
        })?;

    let columns: Vec<&str> = lines[header_idx]
        .trim_start_matches(HEADER_MARKER)
        .split_whitespace()
        .collect();
    if columns.is_empty() {
        return Err(SteerError::UnparsableState("header line has no columns".to_string()));
    }

    let row = lines.get(header_idx + 1).ok_or_else(|| {
        SteerError::UnparsableState(format!("header without a data row: {}", excerpt(response)))
    })?;

    Ok(columns
        .into_iter()
        .zip(row.split_whitespace())
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .collect())
}

fn excerpt(response: &str) -> String {
    let response = response.trim();
    if response.is_empty() {
        return "<empty>".to_string();
    }
    if response.chars().count() > RESPONSE_EXCERPT_CHARS {
        let cut: String = response.chars().take(RESPONSE_EXCERPT_CHARS).collect();
        format!("{cut}...")
    } else {
        response.to_string()
    }
}
