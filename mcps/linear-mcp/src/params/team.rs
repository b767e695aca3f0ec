//! Team-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing teams
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListTeamsParams {
    #[schemars(description = "Maximum number of teams to return (1-250, default 50)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,
}

/// Parameters for fetching a single team
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTeamParams {
    #[schemars(description = "Team UUID")]
    pub team_id: String,
}

/// Parameters for listing a team's workflow states
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListTeamStatesParams {
    #[schemars(description = "Team UUID")]
    pub team_id: String,
}
