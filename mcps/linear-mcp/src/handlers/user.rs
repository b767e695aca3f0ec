//! User handler implementations

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::json;

use crate::linear::{LinearClient, LinearResult};
use crate::params::ListUsersParams;
use crate::types::{self, Connection, User};

use super::{page_size, to_mcp_error};

const VIEWER: &str = r#"
query Viewer {
    viewer { id name email }
}
"#;

const LIST_USERS: &str = r#"
query Users($first: Int, $after: String, $includeArchived: Boolean) {
    users(first: $first, after: $after, includeArchived: $includeArchived) {
        nodes { id name email }
        pageInfo { hasNextPage endCursor }
    }
}
"#;

/// Fetch the authenticated user's profile.
pub(crate) async fn fetch_viewer(client: &LinearClient) -> LinearResult<User> {
    let data = client.execute(VIEWER, json!({})).await?;
    types::decode_at(&data, "/viewer")
}

/// Fetch the authenticated user's profile
pub async fn whoami(client: &LinearClient) -> Result<CallToolResult, McpError> {
    let viewer = fetch_viewer(client).await.map_err(to_mcp_error)?;
    json_success(&viewer)
}

/// List workspace members
pub async fn list_users(
    client: &LinearClient,
    params: ListUsersParams,
) -> Result<CallToolResult, McpError> {
    let users = query_users(client, params).await.map_err(to_mcp_error)?;
    json_success(&users)
}

async fn query_users(
    client: &LinearClient,
    params: ListUsersParams,
) -> LinearResult<Connection<User>> {
    let first = page_size(params.first, 50)?;
    let variables = json!({
        "first": first,
        "after": params.after,
        "includeArchived": params.include_archived.unwrap_or(false),
    });
    let data = client.execute(LIST_USERS, variables).await?;
    types::decode_at(&data, "/users")
}
