//! Label type definitions

use serde::{Deserialize, Serialize};

/// Represents an issue label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Label UUID
    pub id: String,

    /// Label name
    pub name: String,

    /// Display color (hex, e.g. "#ff0000")
    #[serde(default)]
    pub color: Option<String>,
}
