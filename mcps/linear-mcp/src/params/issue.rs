//! Issue-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for fetching a single issue
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetIssueParams {
    #[schemars(description = "Issue UUID or human-readable identifier (e.g. 'ENG-123')")]
    pub issue_id: String,
}

/// Parameters for listing issues
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListIssuesParams {
    #[schemars(
        description = "Raw Linear IssueFilter object passed through as-is, e.g. {\"priority\": {\"lte\": 2}}. See linear.app/developers/filtering"
    )]
    pub filter: Option<serde_json::Value>,

    #[schemars(description = "Maximum number of issues to return (1-250, default 50)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,

    #[schemars(description = "Sort field: 'createdAt' or 'updatedAt' (default 'createdAt')")]
    pub order_by: Option<String>,

    #[schemars(description = "Include archived issues in results (default false)")]
    pub include_archived: Option<bool>,
}

/// Parameters for creating an issue
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
    #[schemars(description = "Team UUID that owns the issue")]
    pub team_id: String,

    #[schemars(description = "Issue title")]
    pub title: String,

    #[schemars(description = "Markdown body")]
    pub description: Option<String>,

    #[schemars(description = "User UUID to assign")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Workflow state UUID; defaults to the team's first backlog state")]
    pub state_id: Option<String>,

    #[schemars(description = "Priority: 0=none, 1=urgent, 2=high, 3=medium, 4=low")]
    pub priority: Option<u8>,

    #[schemars(description = "Label UUIDs to attach")]
    pub label_ids: Option<Vec<String>>,

    #[schemars(description = "Cycle UUID to assign to")]
    pub cycle_id: Option<String>,

    #[schemars(description = "Project UUID to assign to")]
    pub project_id: Option<String>,

    #[schemars(description = "Point estimate")]
    pub estimate: Option<i32>,

    #[schemars(description = "Display name to attribute the action to (actor=app tokens only)")]
    pub create_as_user: Option<String>,

    #[schemars(description = "Avatar URL for the attributed user (actor=app tokens only)")]
    pub display_icon_url: Option<String>,
}

/// Parameters for updating an issue; omitted fields are left unchanged
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateIssueParams {
    #[schemars(description = "Issue UUID or human-readable identifier (e.g. 'ENG-123')")]
    pub issue_id: String,

    #[schemars(description = "New title")]
    pub title: Option<String>,

    #[schemars(description = "New markdown body")]
    pub description: Option<String>,

    #[schemars(description = "New workflow state UUID")]
    pub state_id: Option<String>,

    #[schemars(description = "New assignee UUID")]
    pub assignee_id: Option<String>,

    #[schemars(description = "New priority: 0=none, 1=urgent, 2=high, 3=medium, 4=low")]
    pub priority: Option<u8>,

    #[schemars(description = "Replacement label UUIDs (replaces all)")]
    pub label_ids: Option<Vec<String>>,

    #[schemars(description = "New cycle UUID")]
    pub cycle_id: Option<String>,

    #[schemars(description = "New project UUID")]
    pub project_id: Option<String>,

    #[schemars(description = "New point estimate")]
    pub estimate: Option<i32>,
}
