//! Team and workflow state type definitions

use serde::{Deserialize, Serialize};

/// Represents a Linear team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team UUID
    pub id: String,

    /// Team name
    pub name: String,

    /// Issue identifier prefix (e.g. "ENG")
    pub key: String,
}

/// Represents a workflow state (issue status) within a team's flow.
///
/// Types: backlog | unstarted | started | completed | cancelled | triage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    /// State UUID; issue mutations require this, not the name
    pub id: String,

    /// Display name (e.g. "In Progress")
    pub name: String,

    /// State category
    #[serde(rename = "type")]
    pub state_type: String,

    /// Display color (hex)
    #[serde(default)]
    pub color: Option<String>,

    /// Sort position within the team's flow
    #[serde(default)]
    pub position: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_team_node() {
        let team: Team =
            serde_json::from_value(json!({"id": "t1", "name": "Engineering", "key": "ENG"}))
                .unwrap();
        assert_eq!(team.key, "ENG");
    }

    #[test]
    fn decodes_state_with_reserved_type_field() {
        let state: WorkflowState = serde_json::from_value(json!({
            "id": "s1",
            "name": "In Progress",
            "type": "started",
            "color": "#f2c94c",
            "position": 3.0
        }))
        .unwrap();
        assert_eq!(state.state_type, "started");
    }

    #[test]
    fn team_key_is_required() {
        let node = json!({"id": "t1", "name": "Engineering"});
        assert!(serde_json::from_value::<Team>(node).is_err());
    }
}
