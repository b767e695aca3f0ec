//! User type definitions

use serde::{Deserialize, Serialize};

/// Represents a Linear workspace member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User UUID
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address, when the token is allowed to see it
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_user_node() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn email_is_optional() {
        let user: User = serde_json::from_value(json!({"id": "u1", "name": "Ada"})).unwrap();
        assert!(user.email.is_none());
    }
}
