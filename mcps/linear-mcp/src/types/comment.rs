//! Comment type definitions

use serde::{Deserialize, Serialize};

use super::common::name_ref;

/// Represents a comment on a Linear issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment UUID
    pub id: String,

    /// Comment body (markdown)
    pub body: String,

    /// Author display name
    #[serde(default, deserialize_with = "name_ref")]
    pub user: Option<String>,

    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_with_author_flattened() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "c1",
            "body": "Looks good to me",
            "user": {"name": "Grace"},
            "createdAt": "2026-01-12T08:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(comment.user.as_deref(), Some("Grace"));
    }

    #[test]
    fn body_is_required() {
        let node = json!({"id": "c1"});
        assert!(serde_json::from_value::<Comment>(node).is_err());
    }
}
