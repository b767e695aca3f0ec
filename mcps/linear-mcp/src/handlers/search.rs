//! Search handler implementations

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::json;

use crate::linear::{LinearClient, LinearError, LinearResult};
use crate::params::SearchIssuesParams;
use crate::types::{self, Connection, Issue};

use super::{page_size, to_mcp_error};

const SEARCH_ISSUES: &str = r#"
query SearchIssues(
    $query: String!,
    $first: Int,
    $after: String,
    $includeArchived: Boolean
) {
    issueSearch(
        query: $query,
        first: $first,
        after: $after,
        includeArchived: $includeArchived
    ) {
        nodes {
            id identifier title priority createdAt updatedAt archivedAt
            state { name }
            assignee { name }
            team { id key }
            labels { nodes { name } }
        }
        pageInfo { hasNextPage endCursor }
    }
}
"#;

/// Search issues with free-form text; ranking is the API's
pub async fn search_issues(
    client: &LinearClient,
    params: SearchIssuesParams,
) -> Result<CallToolResult, McpError> {
    let issues = query_search(client, params).await.map_err(to_mcp_error)?;
    json_success(&issues)
}

async fn query_search(
    client: &LinearClient,
    params: SearchIssuesParams,
) -> LinearResult<Connection<Issue>> {
    if params.query.trim().is_empty() {
        return Err(LinearError::Validation(
            "search query must not be empty".to_string(),
        ));
    }
    let first = page_size(params.first, 25)?;

    let variables = json!({
        "query": params.query,
        "first": first,
        "after": params.after,
        "includeArchived": params.include_archived.unwrap_or(false),
    });
    let data = client.execute(SEARCH_ISSUES, variables).await?;
    types::decode_at(&data, "/issueSearch")
}
