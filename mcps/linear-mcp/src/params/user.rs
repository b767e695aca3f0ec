//! User-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing workspace members
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListUsersParams {
    #[schemars(description = "Maximum number of users to return (1-250, default 50)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,

    #[schemars(description = "Include deactivated users in results (default false)")]
    pub include_archived: Option<bool>,
}
