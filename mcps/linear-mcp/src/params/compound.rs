//! Compound workflow parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the issue-context workflow
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueContextParams {
    #[schemars(description = "Issue UUID or human-readable identifier (e.g. 'ENG-123')")]
    pub issue_id: String,
}

/// Parameters for listing the authenticated user's issues
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MyIssuesParams {
    #[schemars(description = "Maximum number of issues to return (1-250, default 50)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,

    #[schemars(description = "Include archived issues in results (default false)")]
    pub include_archived: Option<bool>,
}
