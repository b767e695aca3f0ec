//! Attachment-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for fetching a single attachment
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetAttachmentParams {
    #[schemars(description = "Attachment UUID")]
    pub attachment_id: String,
}

/// Parameters for looking up attachments by their external URL
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetAttachmentByUrlParams {
    #[schemars(description = "External URL to look up")]
    pub url: String,
}

/// Parameters for creating an attachment on an issue
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateAttachmentParams {
    #[schemars(description = "UUID or identifier (e.g. 'ENG-123') of the parent issue")]
    pub issue_id: String,

    #[schemars(
        description = "External URL to link; idempotent per issue - re-creating with the same URL updates instead"
    )]
    pub url: String,

    #[schemars(description = "Display title")]
    pub title: Option<String>,

    #[schemars(description = "Display subtitle")]
    pub subtitle: Option<String>,

    #[schemars(description = "Override icon URL (png or jpg)")]
    pub icon_url: Option<String>,

    #[schemars(description = "Arbitrary key-value metadata object")]
    pub metadata: Option<serde_json::Value>,

    #[schemars(description = "Display name to attribute the action to (actor=app tokens only)")]
    pub create_as_user: Option<String>,

    #[schemars(description = "Avatar URL for the attributed user (actor=app tokens only)")]
    pub display_icon_url: Option<String>,
}

/// Parameters for updating an attachment; omitted fields are left unchanged
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateAttachmentParams {
    #[schemars(description = "Attachment UUID")]
    pub attachment_id: String,

    #[schemars(description = "New display title")]
    pub title: Option<String>,

    #[schemars(description = "New display subtitle")]
    pub subtitle: Option<String>,

    #[schemars(description = "New metadata object (replaces existing)")]
    pub metadata: Option<serde_json::Value>,
}
