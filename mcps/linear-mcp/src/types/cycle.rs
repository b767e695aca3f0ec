//! Cycle type definitions

use serde::{Deserialize, Serialize};

/// Represents a Linear cycle (a team's fixed-duration iteration)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    /// Cycle UUID
    pub id: String,

    /// Sequential cycle number within the team
    pub number: u32,

    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,

    /// Start timestamp (ISO 8601)
    #[serde(default)]
    pub starts_at: Option<String>,

    /// End timestamp (ISO 8601)
    #[serde(default)]
    pub ends_at: Option<String>,

    /// Completion fraction reported by Linear
    #[serde(default)]
    pub progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_cycle_node() {
        let cycle: Cycle = serde_json::from_value(json!({
            "id": "cy1",
            "number": 14,
            "name": "Sprint 14",
            "startsAt": "2026-01-05T00:00:00.000Z",
            "endsAt": "2026-01-19T00:00:00.000Z",
            "progress": 0.25
        }))
        .unwrap();
        assert_eq!(cycle.number, 14);
        assert_eq!(cycle.name.as_deref(), Some("Sprint 14"));
    }

    #[test]
    fn number_is_required() {
        let node = json!({"id": "cy1"});
        assert!(serde_json::from_value::<Cycle>(node).is_err());
    }
}
