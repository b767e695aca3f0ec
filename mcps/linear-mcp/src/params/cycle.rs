//! Cycle-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing a team's cycles
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListCyclesParams {
    #[schemars(description = "Team UUID")]
    pub team_id: String,

    #[schemars(description = "Maximum number of cycles to return (1-250, default 25)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,

    #[schemars(description = "Include archived cycles in results (default false)")]
    pub include_archived: Option<bool>,
}

/// Parameters for fetching a single cycle
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCycleParams {
    #[schemars(description = "Cycle UUID")]
    pub cycle_id: String,
}

/// Parameters for fetching a team's currently active cycle
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ActiveCycleParams {
    #[schemars(description = "Team UUID")]
    pub team_id: String,
}
