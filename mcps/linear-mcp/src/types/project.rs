//! Project type definitions

use serde::{Deserialize, Serialize};

/// Represents a Linear project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project UUID
    pub id: String,

    /// Project name
    pub name: String,

    /// Markdown description; selected by single-project fetches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Project state: planned | started | paused | completed | cancelled
    #[serde(default)]
    pub state: Option<String>,

    /// Completion fraction reported by Linear
    #[serde(default)]
    pub progress: f64,

    /// Target completion date (ISO 8601 date)
    #[serde(default)]
    pub target_date: Option<String>,

    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: Option<String>,
}
