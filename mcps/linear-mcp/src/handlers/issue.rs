//! Issue handler implementations

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::{json, Map};

use crate::linear::{LinearClient, LinearError, LinearResult};
use crate::params::{CreateIssueParams, GetIssueParams, ListIssuesParams, UpdateIssueParams};
use crate::types::{self, Connection, Issue};

use super::{check_issue_ref, check_priority, insert_opt, page_size, to_mcp_error};

const GET_ISSUE: &str = r#"
query GetIssue($id: String!) {
    issue(id: $id) {
        id identifier title description priority createdAt updatedAt archivedAt
        state { name }
        assignee { name }
        team { id key }
        labels { nodes { name } }
    }
}
"#;

const LIST_ISSUES: &str = r#"
query Issues(
    $filter: IssueFilter,
    $first: Int,
    $after: String,
    $orderBy: PaginationOrderBy,
    $includeArchived: Boolean
) {
    issues(
        filter: $filter,
        first: $first,
        after: $after,
        orderBy: $orderBy,
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

const CREATE_ISSUE: &str = r#"
mutation IssueCreate($input: IssueCreateInput!) {
    issueCreate(input: $input) {
        success
        issue {
            id identifier title priority createdAt updatedAt archivedAt
            state { name }
            assignee { name }
            team { id key }
            labels { nodes { name } }
        }
    }
}
"#;

const UPDATE_ISSUE: &str = r#"
mutation IssueUpdate($id: String!, $input: IssueUpdateInput!) {
    issueUpdate(id: $id, input: $input) {
        success
        issue {
            id identifier title priority createdAt updatedAt archivedAt
            state { name }
            assignee { name }
            team { id key }
            labels { nodes { name } }
        }
    }
}
"#;

/// Fetch an issue by UUID or identifier, including its description.
pub(crate) async fn fetch_issue(client: &LinearClient, issue_id: &str) -> LinearResult<Issue> {
    check_issue_ref(issue_id)?;
    let data = client.execute(GET_ISSUE, json!({ "id": issue_id })).await?;
    types::decode_at(&data, "/issue")
}

/// List issues with optional filter passthrough.
pub(crate) async fn query_issues(
    client: &LinearClient,
    params: ListIssuesParams,
) -> LinearResult<Connection<Issue>> {
    let first = page_size(params.first, 50)?;
    let order_by = params.order_by.unwrap_or_else(|| "createdAt".to_string());
    if order_by != "createdAt" && order_by != "updatedAt" {
        return Err(LinearError::Validation(format!(
            "order_by must be 'createdAt' or 'updatedAt', got '{order_by}'"
        )));
    }

    let variables = json!({
        "filter": params.filter,
        "first": first,
        "after": params.after,
        "orderBy": order_by,
        "includeArchived": params.include_archived.unwrap_or(false),
    });
    let data = client.execute(LIST_ISSUES, variables).await?;
    types::decode_at(&data, "/issues")
}

/// Fetch a single issue by UUID or identifier
pub async fn get_issue(
    client: &LinearClient,
    params: GetIssueParams,
) -> Result<CallToolResult, McpError> {
    let issue = fetch_issue(client, &params.issue_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&issue)
}

/// List issues with optional GraphQL filter passthrough
pub async fn list_issues(
    client: &LinearClient,
    params: ListIssuesParams,
) -> Result<CallToolResult, McpError> {
    let issues = query_issues(client, params).await.map_err(to_mcp_error)?;
    json_success(&issues)
}

/// Create a new issue
pub async fn create_issue(
    client: &LinearClient,
    params: CreateIssueParams,
) -> Result<CallToolResult, McpError> {
    let issue = do_create(client, params).await.map_err(to_mcp_error)?;
    json_success(&issue)
}

async fn do_create(client: &LinearClient, params: CreateIssueParams) -> LinearResult<Issue> {
    check_priority(params.priority)?;

    let mut input = Map::new();
    input.insert("teamId".to_string(), json!(params.team_id));
    input.insert("title".to_string(), json!(params.title));
    insert_opt(&mut input, "description", params.description);
    insert_opt(&mut input, "assigneeId", params.assignee_id);
    insert_opt(&mut input, "stateId", params.state_id);
    insert_opt(&mut input, "priority", params.priority);
    insert_opt(&mut input, "labelIds", params.label_ids);
    insert_opt(&mut input, "cycleId", params.cycle_id);
    insert_opt(&mut input, "projectId", params.project_id);
    insert_opt(&mut input, "estimate", params.estimate);
    insert_opt(&mut input, "createAsUser", params.create_as_user);
    insert_opt(&mut input, "displayIconUrl", params.display_icon_url);

    let data = client.execute(CREATE_ISSUE, json!({ "input": input })).await?;
    types::decode_mutation(&data, "issueCreate", "issue")
}

/// Update an existing issue
pub async fn update_issue(
    client: &LinearClient,
    params: UpdateIssueParams,
) -> Result<CallToolResult, McpError> {
    let issue = do_update(client, params).await.map_err(to_mcp_error)?;
    json_success(&issue)
}

async fn do_update(client: &LinearClient, params: UpdateIssueParams) -> LinearResult<Issue> {
    check_issue_ref(&params.issue_id)?;
    check_priority(params.priority)?;

    let mut input = Map::new();
    insert_opt(&mut input, "title", params.title);
    insert_opt(&mut input, "description", params.description);
    insert_opt(&mut input, "stateId", params.state_id);
    insert_opt(&mut input, "assigneeId", params.assignee_id);
    insert_opt(&mut input, "priority", params.priority);
    insert_opt(&mut input, "labelIds", params.label_ids);
    insert_opt(&mut input, "cycleId", params.cycle_id);
    insert_opt(&mut input, "projectId", params.project_id);
    insert_opt(&mut input, "estimate", params.estimate);

    if input.is_empty() {
        return Err(LinearError::Validation("no fields to update".to_string()));
    }

    let data = client
        .execute(UPDATE_ISSUE, json!({ "id": params.issue_id, "input": input }))
        .await?;
    types::decode_mutation(&data, "issueUpdate", "issue")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::linear::transport::testing::StubTransport;
    use crate::linear::LinearResult;

    fn client_with(responses: Vec<LinearResult<Value>>) -> LinearClient {
        LinearClient::with_transport(Arc::new(StubTransport::new(responses)))
    }

    fn issue_node(identifier: &str) -> Value {
        json!({
            "id": "123e4567-e89b-42d3-a456-426614174000",
            "identifier": identifier,
            "title": "T",
            "priority": 0,
            "team": {"id": "team-1", "key": "ENG"}
        })
    }

    #[tokio::test]
    async fn get_issue_rejects_malformed_reference() {
        let client = client_with(vec![]);
        let err = fetch_issue(&client, "not a ref").await.unwrap_err();
        assert!(matches!(err, LinearError::Validation(_)));
    }

    #[tokio::test]
    async fn get_issue_decodes_node() {
        let client = client_with(vec![Ok(json!({"data": {"issue": issue_node("ENG-1")}}))]);
        let issue = fetch_issue(&client, "ENG-1").await.unwrap();
        assert_eq!(issue.identifier, "ENG-1");
    }

    #[tokio::test]
    async fn update_with_no_fields_is_validation_error() {
        let client = client_with(vec![]);
        let params = UpdateIssueParams {
            issue_id: "ENG-1".to_string(),
            title: None,
            description: None,
            state_id: None,
            assignee_id: None,
            priority: None,
            label_ids: None,
            cycle_id: None,
            project_id: None,
            estimate: None,
        };
        let err = do_update(&client, params).await.unwrap_err();
        assert!(matches!(err, LinearError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_priority() {
        let client = client_with(vec![]);
        let params = CreateIssueParams {
            team_id: "team-1".to_string(),
            title: "T".to_string(),
            description: None,
            assignee_id: None,
            state_id: None,
            priority: Some(9),
            label_ids: None,
            cycle_id: None,
            project_id: None,
            estimate: None,
            create_as_user: None,
            display_icon_url: None,
        };
        let err = do_create(&client, params).await.unwrap_err();
        assert!(matches!(err, LinearError::Validation(_)));
    }

    #[tokio::test]
    async fn create_sends_only_supplied_fields() {
        let stub = Arc::new(StubTransport::new(vec![Ok(json!({
            "data": {"issueCreate": {"success": true, "issue": issue_node("ENG-2")}}
        }))]));
        let client = LinearClient::with_transport(stub.clone());
        let params = CreateIssueParams {
            team_id: "team-1".to_string(),
            title: "T".to_string(),
            description: Some("body".to_string()),
            assignee_id: None,
            state_id: None,
            priority: Some(2),
            label_ids: None,
            cycle_id: None,
            project_id: None,
            estimate: None,
            create_as_user: None,
            display_icon_url: None,
        };
        do_create(&client, params).await.unwrap();

        let requests = stub.requests.lock().unwrap();
        let input = &requests[0]["variables"]["input"];
        assert_eq!(input["teamId"], "team-1");
        assert_eq!(input["priority"], 2);
        assert!(input.get("assigneeId").is_none());
    }

    #[tokio::test]
    async fn list_rejects_unknown_order_by() {
        let client = client_with(vec![]);
        let params = ListIssuesParams {
            filter: None,
            first: None,
            after: None,
            order_by: Some("priority".to_string()),
            include_archived: None,
        };
        let err = query_issues(&client, params).await.unwrap_err();
        assert!(matches!(err, LinearError::Validation(_)));
    }

    #[tokio::test]
    async fn list_defaults_include_archived_to_false() {
        let stub = Arc::new(StubTransport::new(vec![Ok(json!({
            "data": {"issues": {"nodes": [], "pageInfo": {"hasNextPage": false, "endCursor": null}}}
        }))]));
        let client = LinearClient::with_transport(stub.clone());
        let params = ListIssuesParams {
            filter: None,
            first: None,
            after: None,
            order_by: None,
            include_archived: None,
        };
        query_issues(&client, params).await.unwrap();

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0]["variables"]["includeArchived"], false);
        assert_eq!(requests[0]["variables"]["first"], 50);
    }
}
