//! Compound workflows: multi-step sequences exposed as single tools
//!
//! Each workflow composes the discrete operations sequentially and
//! fails atomically: the first failing sub-call aborts the whole
//! tool call, so no partial result is ever returned.

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::json;

use crate::linear::{LinearClient, LinearError, LinearResult};
use crate::params::{IssueContextParams, ListIssuesParams, MyIssuesParams};
use crate::types::{Connection, Issue, IssueContext};

use super::comment::query_comments;
use super::issue::{fetch_issue, query_issues};
use super::team::query_team_states;
use super::user::fetch_viewer;
use super::to_mcp_error;

/// Fetch full context for an issue: details, discussion, and the
/// workflow states it can move between
pub async fn issue_context(
    client: &LinearClient,
    params: IssueContextParams,
) -> Result<CallToolResult, McpError> {
    let context = build_issue_context(client, &params.issue_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&context)
}

async fn build_issue_context(
    client: &LinearClient,
    issue_id: &str,
) -> LinearResult<IssueContext> {
    let issue = fetch_issue(client, issue_id).await?;
    let comments = query_comments(client, issue_id, None, None).await?;

    let team_id = issue
        .team
        .as_ref()
        .map(|t| t.id.clone())
        .ok_or_else(|| LinearError::Decode("issue is missing its team reference".to_string()))?;
    let states = query_team_states(client, &team_id).await?;

    Ok(IssueContext {
        issue,
        comments: comments.nodes,
        states: states.nodes,
    })
}

/// Fetch issues assigned to the authenticated user
pub async fn my_issues(
    client: &LinearClient,
    params: MyIssuesParams,
) -> Result<CallToolResult, McpError> {
    let issues = fetch_my_issues(client, params).await.map_err(to_mcp_error)?;
    json_success(&issues)
}

async fn fetch_my_issues(
    client: &LinearClient,
    params: MyIssuesParams,
) -> LinearResult<Connection<Issue>> {
    let viewer = fetch_viewer(client).await?;
    let filter = json!({ "assignee": { "id": { "eq": viewer.id } } });
    query_issues(
        client,
        ListIssuesParams {
            filter: Some(filter),
            first: params.first,
            after: params.after,
            order_by: None,
            include_archived: params.include_archived,
        },
    )
    .await
}
