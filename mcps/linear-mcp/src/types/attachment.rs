//! Attachment type definitions
//!
//! Attachments link external resources to issues. The URL acts as an
//! idempotent key per issue: re-creating with the same URL updates the
//! existing attachment instead of duplicating it.

use serde::{Deserialize, Serialize};

/// Represents an issue attachment (external link)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment UUID
    pub id: String,

    /// External URL being linked
    pub url: String,

    /// Display title
    #[serde(default)]
    pub title: Option<String>,

    /// Display subtitle
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Arbitrary key-value payload set by the creating integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}
