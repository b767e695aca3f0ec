//! Project-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for fetching a single project
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    #[schemars(description = "Project UUID")]
    pub project_id: String,
}

/// Parameters for listing projects
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[schemars(description = "Raw Linear ProjectFilter object passed through as-is")]
    pub filter: Option<serde_json::Value>,

    #[schemars(description = "Maximum number of projects to return (1-250, default 50)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,

    #[schemars(description = "Include archived projects in results (default false)")]
    pub include_archived: Option<bool>,
}

/// Parameters for creating a project
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    #[schemars(description = "Project name")]
    pub name: String,

    #[schemars(description = "Team UUIDs to associate with the project")]
    pub team_ids: Option<Vec<String>>,

    #[schemars(description = "Markdown description")]
    pub description: Option<String>,

    #[schemars(description = "Initial state: planned, started, paused, completed, cancelled")]
    pub state: Option<String>,

    #[schemars(description = "ISO-8601 target completion date")]
    pub target_date: Option<String>,
}

/// Parameters for updating a project; omitted fields are left unchanged
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    #[schemars(description = "Project UUID")]
    pub project_id: String,

    #[schemars(description = "New name")]
    pub name: Option<String>,

    #[schemars(description = "New markdown description")]
    pub description: Option<String>,

    #[schemars(description = "New state: planned, started, paused, completed, cancelled")]
    pub state: Option<String>,

    #[schemars(description = "New ISO-8601 target date")]
    pub target_date: Option<String>,
}
