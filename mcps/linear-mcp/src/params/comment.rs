//! Comment-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing comments on an issue
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListCommentsParams {
    #[schemars(description = "UUID or identifier (e.g. 'ENG-123') of the parent issue")]
    pub issue_id: String,

    #[schemars(description = "Maximum number of comments to return (1-250, default 50)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,
}

/// Parameters for adding a comment to an issue
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCommentParams {
    #[schemars(description = "UUID or identifier (e.g. 'ENG-123') of the parent issue")]
    pub issue_id: String,

    #[schemars(description = "Comment body in markdown")]
    pub body: String,

    #[schemars(description = "Display name to attribute the comment to (actor=app tokens only)")]
    pub create_as_user: Option<String>,

    #[schemars(description = "Avatar URL for the attributed user (actor=app tokens only)")]
    pub display_icon_url: Option<String>,
}
