//! Label-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing labels
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListLabelsParams {
    #[schemars(description = "Team UUID to scope results; omit for workspace-level labels")]
    pub team_id: Option<String>,

    #[schemars(description = "Maximum number of labels to return (1-250, default 50)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,
}

/// Parameters for creating a label
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "Label name")]
    pub name: String,

    #[schemars(description = "Team UUID to scope the label to; omit for workspace scope")]
    pub team_id: Option<String>,

    #[schemars(description = "Hex color string (e.g. '#ff0000')")]
    pub color: Option<String>,
}
