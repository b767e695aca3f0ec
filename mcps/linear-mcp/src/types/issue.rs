//! Issue type definitions
//!
//! Mirrors the fields the issue queries select, with the wire nesting
//! flattened: state and assignee collapse to their display names,
//! labels to a list of names.

use serde::{Deserialize, Deserializer, Serialize};

use super::comment::Comment;
use super::common::{label_names, name_ref};
use super::team::WorkflowState;

/// Represents a Linear issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Issue UUID
    pub id: String,

    /// Team-prefixed code, e.g. "ENG-123"
    pub identifier: String,

    /// Issue title
    pub title: String,

    /// Markdown body; selected by single-issue fetches, absent from lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Priority: 0=none, 1=urgent, 2=high, 3=medium, 4=low
    #[serde(deserialize_with = "priority")]
    pub priority: u8,

    /// Current workflow state name
    #[serde(default, deserialize_with = "name_ref")]
    pub state: Option<String>,

    /// Assignee display name
    #[serde(default, deserialize_with = "name_ref")]
    pub assignee: Option<String>,

    /// Owning team; compound lookups chain through its id
    #[serde(default)]
    pub team: Option<TeamRef>,

    /// Label names
    #[serde(default, deserialize_with = "label_names")]
    pub labels: Vec<String>,

    /// Set when Linear has archived the issue
    #[serde(default)]
    pub archived_at: Option<String>,

    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Issue {
    /// Whether Linear has archived this issue.
    pub fn archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

/// Reference to the team owning an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    /// Team UUID
    pub id: String,

    /// Team key/prefix (e.g. "ENG")
    #[serde(default)]
    pub key: Option<String>,
}

// Linear types priority as a Float; accept integral floats but fail
// closed on anything outside the 0..=4 enum.
fn priority<'de, D>(de: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(de)?;
    if raw.fract() == 0.0 && (0.0..=4.0).contains(&raw) {
        Ok(raw as u8)
    } else {
        Err(serde::de::Error::custom(format!(
            "priority {raw} outside 0..=4"
        )))
    }
}

/// Merged result of the issue-context workflow: the issue itself, its
/// discussion, and the workflow states it can move between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueContext {
    pub issue: Issue,
    pub comments: Vec<Comment>,
    pub states: Vec<WorkflowState>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_node() -> serde_json::Value {
        json!({
            "id": "123e4567-e89b-42d3-a456-426614174000",
            "identifier": "ENG-42",
            "title": "Fix login flow",
            "description": "Steps to reproduce...",
            "priority": 2,
            "state": {"name": "In Progress"},
            "assignee": {"name": "Ada"},
            "team": {"id": "team-1", "key": "ENG"},
            "labels": {"nodes": [{"name": "bug"}, {"name": "auth"}]},
            "createdAt": "2026-01-10T09:00:00.000Z",
            "updatedAt": "2026-01-11T10:30:00.000Z"
        })
    }

    #[test]
    fn decodes_full_node_with_flattening() {
        let issue: Issue = serde_json::from_value(sample_node()).unwrap();
        assert_eq!(issue.identifier, "ENG-42");
        assert_eq!(issue.priority, 2);
        assert_eq!(issue.state.as_deref(), Some("In Progress"));
        assert_eq!(issue.assignee.as_deref(), Some("Ada"));
        assert_eq!(issue.labels, vec!["bug", "auth"]);
        assert_eq!(issue.team.as_ref().map(|t| t.id.as_str()), Some("team-1"));
        assert!(!issue.archived());
    }

    #[test]
    fn accepts_integral_float_priority() {
        let mut node = sample_node();
        node["priority"] = json!(3.0);
        let issue: Issue = serde_json::from_value(node).unwrap();
        assert_eq!(issue.priority, 3);
    }

    #[test]
    fn rejects_priority_outside_enum() {
        let mut node = sample_node();
        node["priority"] = json!(7);
        assert!(serde_json::from_value::<Issue>(node).is_err());

        let mut node = sample_node();
        node["priority"] = json!(2.5);
        assert!(serde_json::from_value::<Issue>(node).is_err());
    }

    #[test]
    fn missing_required_field_fails() {
        let mut node = sample_node();
        node.as_object_mut().unwrap().remove("id");
        assert!(serde_json::from_value::<Issue>(node).is_err());
    }

    #[test]
    fn null_references_flatten_to_none() {
        let mut node = sample_node();
        node["state"] = json!(null);
        node["assignee"] = json!(null);
        let issue: Issue = serde_json::from_value(node).unwrap();
        assert!(issue.state.is_none());
        assert!(issue.assignee.is_none());
    }

    #[test]
    fn archived_at_sets_flag() {
        let mut node = sample_node();
        node["archivedAt"] = json!("2026-02-01T00:00:00.000Z");
        let issue: Issue = serde_json::from_value(node).unwrap();
        assert!(issue.archived());
    }
}
