//! Search-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for full-text issue search
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchIssuesParams {
    #[schemars(description = "Search query string (natural language supported)")]
    pub query: String,

    #[schemars(description = "Maximum number of results to return (1-250, default 25)")]
    pub first: Option<u32>,

    #[schemars(description = "Pagination cursor from a previous response's pageInfo.endCursor")]
    pub after: Option<String>,

    #[schemars(description = "Include archived issues in results (default false)")]
    pub include_archived: Option<bool>,
}
