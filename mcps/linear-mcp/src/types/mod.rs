//! Typed models for Linear API responses
//!
//! Each model decodes from the raw GraphQL `data` payload and fails
//! closed: a missing required field is a decode error, never a
//! silently defaulted value.

pub mod attachment;
pub mod comment;
pub mod common;
pub mod cycle;
pub mod issue;
pub mod label;
pub mod project;
pub mod team;
pub mod user;

pub use attachment::Attachment;
pub use comment::Comment;
pub use common::{Connection, IssueRef, PageInfo};
pub use cycle::Cycle;
pub use issue::{Issue, IssueContext, TeamRef};
pub use label::Label;
pub use project::Project;
pub use team::{Team, WorkflowState};
pub use user::User;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::linear::{ApiError, LinearError};

/// Decode the object at `pointer` within a `data` payload.
///
/// `pointer` is a JSON pointer relative to `data`, e.g. `/issue` or
/// `/team/cycles`. A missing or null target is a schema mismatch.
pub(crate) fn decode_at<T: DeserializeOwned>(data: &Value, pointer: &str) -> Result<T, LinearError> {
    match data.pointer(pointer) {
        None | Some(Value::Null) => Err(LinearError::Decode(format!(
            "`{pointer}` missing from response"
        ))),
        Some(node) => serde_json::from_value(node.clone())
            .map_err(|e| LinearError::Decode(format!("`{pointer}`: {e}"))),
    }
}

/// Decode the object at `pointer`, treating a missing or null target
/// as an ordinary absence rather than a schema mismatch.
pub(crate) fn decode_opt_at<T: DeserializeOwned>(
    data: &Value,
    pointer: &str,
) -> Result<Option<T>, LinearError> {
    match data.pointer(pointer) {
        None | Some(Value::Null) => Ok(None),
        Some(node) => serde_json::from_value(node.clone())
            .map(Some)
            .map_err(|e| LinearError::Decode(format!("`{pointer}`: {e}"))),
    }
}

/// Decode the node a mutation payload wraps, checking its `success`
/// flag first.
///
/// Linear mutations return `{ <payload>: { success, <node>: {...} } }`.
pub(crate) fn decode_mutation<T: DeserializeOwned>(
    data: &Value,
    payload: &str,
    node: &str,
) -> Result<T, LinearError> {
    let payload_node = match data.get(payload) {
        None | Some(Value::Null) => {
            return Err(LinearError::Decode(format!(
                "`{payload}` missing from response"
            )))
        }
        Some(value) => value,
    };

    let succeeded = payload_node
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !succeeded {
        return Err(LinearError::Api(vec![ApiError {
            message: format!("{payload} reported failure"),
            path: None,
        }]));
    }

    decode_at(data, &format!("/{payload}/{node}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_at_fails_on_missing_field() {
        let data = json!({"issue": null});
        let err = decode_at::<User>(&data, "/issue").unwrap_err();
        assert!(matches!(err, LinearError::Decode(_)));
    }

    #[test]
    fn decode_at_reports_pointer_in_message() {
        let data = json!({});
        let err = decode_at::<User>(&data, "/viewer").unwrap_err();
        assert!(err.to_string().contains("/viewer"));
    }

    #[test]
    fn decode_opt_at_returns_none_for_null() {
        let data = json!({"team": {"activeCycle": null}});
        let cycle = decode_opt_at::<Cycle>(&data, "/team/activeCycle").unwrap();
        assert!(cycle.is_none());
    }

    #[test]
    fn decode_mutation_checks_success_flag() {
        let data = json!({"issueCreate": {"success": false}});
        let err = decode_mutation::<Issue>(&data, "issueCreate", "issue").unwrap_err();
        assert!(matches!(err, LinearError::Api(_)));
    }

    #[test]
    fn decode_mutation_returns_wrapped_node() {
        let data = json!({
            "issueLabelCreate": {
                "success": true,
                "issueLabel": {"id": "l1", "name": "bug", "color": "#ff0000"}
            }
        });
        let label: Label = decode_mutation(&data, "issueLabelCreate", "issueLabel").unwrap();
        assert_eq!(label.name, "bug");
    }

    #[test]
    fn decode_mutation_fails_on_missing_payload() {
        let data = json!({});
        let err = decode_mutation::<Issue>(&data, "issueCreate", "issue").unwrap_err();
        assert!(matches!(err, LinearError::Decode(_)));
    }
}
