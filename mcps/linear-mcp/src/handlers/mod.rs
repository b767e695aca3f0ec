//! Handler implementations for Linear MCP tools
//!
//! Organized by domain. Each handler validates its arguments, builds a
//! fixed GraphQL document, dispatches through the shared client, and
//! decodes the response into the typed models. Dispatch failures
//! propagate untouched; nothing is swallowed or retried here.

mod attachment;
mod comment;
mod compound;
mod cycle;
mod issue;
mod label;
mod project;
mod search;
mod team;
mod user;

pub use attachment::*;
pub use comment::*;
pub use compound::*;
pub use cycle::*;
pub use issue::*;
pub use label::*;
pub use project::*;
pub use search::*;
pub use team::*;
pub use user::*;

use mcp_common::{internal_error, invalid_params, McpError};
use serde_json::{json, Map, Value};

use crate::linear::LinearError;
use crate::types::IssueRef;

/// Map a LinearError onto the MCP error space.
///
/// Validation failures are the caller's to fix; everything else is an
/// internal condition the invoking agent may retry or report.
pub fn to_mcp_error(e: LinearError) -> McpError {
    match e {
        LinearError::Validation(msg) => invalid_params(msg),
        other => internal_error(other.to_string()),
    }
}

/// Resolve a `first` pagination argument against Linear's page cap.
pub(crate) fn page_size(first: Option<u32>, default: u32) -> Result<u32, LinearError> {
    let first = first.unwrap_or(default);
    if (1..=250).contains(&first) {
        Ok(first)
    } else {
        Err(LinearError::Validation(format!(
            "first must be between 1 and 250, got {first}"
        )))
    }
}

/// Reject issue references that are neither a UUID nor an identifier.
pub(crate) fn check_issue_ref(raw: &str) -> Result<(), LinearError> {
    IssueRef::parse(raw).map(|_| ()).ok_or_else(|| {
        LinearError::Validation(format!(
            "'{raw}' is neither an issue UUID nor an identifier like ENG-123"
        ))
    })
}

/// Reject priorities outside Linear's closed 0..=4 enum.
pub(crate) fn check_priority(priority: Option<u8>) -> Result<(), LinearError> {
    match priority {
        Some(p) if p > 4 => Err(LinearError::Validation(format!(
            "priority must be 0-4, got {p}"
        ))),
        _ => Ok(()),
    }
}

/// Insert a mutation input field only when the caller supplied it.
pub(crate) fn insert_opt<T: serde::Serialize>(
    input: &mut Map<String, Value>,
    key: &str,
    value: Option<T>,
) {
    if let Some(value) = value {
        input.insert(key.to_string(), json!(value));
    }
}
