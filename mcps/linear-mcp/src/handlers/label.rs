//! Label handler implementations

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::{json, Map};

use crate::linear::{LinearClient, LinearResult};
use crate::params::{CreateLabelParams, ListLabelsParams};
use crate::types::{self, Connection, Label};

use super::{insert_opt, page_size, to_mcp_error};

const TEAM_LABELS: &str = r#"
query TeamLabels($id: String!, $first: Int, $after: String) {
    team(id: $id) {
        labels(first: $first, after: $after) {
            nodes { id name color }
            pageInfo { hasNextPage endCursor }
        }
    }
}
"#;

const WORKSPACE_LABELS: &str = r#"
query Labels($first: Int, $after: String) {
    issueLabels(first: $first, after: $after) {
        nodes { id name color }
        pageInfo { hasNextPage endCursor }
    }
}
"#;

const CREATE_LABEL: &str = r#"
mutation LabelCreate($input: IssueLabelCreateInput!) {
    issueLabelCreate(input: $input) {
        success
        issueLabel { id name color }
    }
}
"#;

/// List labels for the workspace, optionally scoped to a team
pub async fn list_labels(
    client: &LinearClient,
    params: ListLabelsParams,
) -> Result<CallToolResult, McpError> {
    let labels = query_labels(client, params).await.map_err(to_mcp_error)?;
    json_success(&labels)
}

async fn query_labels(
    client: &LinearClient,
    params: ListLabelsParams,
) -> LinearResult<Connection<Label>> {
    let first = page_size(params.first, 50)?;

    match params.team_id {
        Some(team_id) => {
            let variables = json!({ "id": team_id, "first": first, "after": params.after });
            let data = client.execute(TEAM_LABELS, variables).await?;
            types::decode_at(&data, "/team/labels")
        }
        None => {
            let variables = json!({ "first": first, "after": params.after });
            let data = client.execute(WORKSPACE_LABELS, variables).await?;
            types::decode_at(&data, "/issueLabels")
        }
    }
}

/// Create a new label, at team or workspace scope
pub async fn create_label(
    client: &LinearClient,
    params: CreateLabelParams,
) -> Result<CallToolResult, McpError> {
    let label = do_create(client, params).await.map_err(to_mcp_error)?;
    json_success(&label)
}

async fn do_create(client: &LinearClient, params: CreateLabelParams) -> LinearResult<Label> {
    let mut input = Map::new();
    input.insert("name".to_string(), json!(params.name));
    insert_opt(&mut input, "teamId", params.team_id);
    insert_opt(&mut input, "color", params.color);

    let data = client
        .execute(CREATE_LABEL, json!({ "input": input }))
        .await?;
    types::decode_mutation(&data, "issueLabelCreate", "issueLabel")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::linear::transport::testing::StubTransport;

    fn client_with(responses: Vec<LinearResult<Value>>) -> LinearClient {
        LinearClient::with_transport(Arc::new(StubTransport::new(responses)))
    }

    #[tokio::test]
    async fn workspace_listing_uses_issue_labels_root() {
        let stub = Arc::new(StubTransport::new(vec![Ok(json!({
            "data": {"issueLabels": {"nodes": [{"id": "l1", "name": "bug"}],
                      "pageInfo": {"hasNextPage": false, "endCursor": null}}}
        }))]));
        let client = LinearClient::with_transport(stub.clone());
        let params = ListLabelsParams {
            team_id: None,
            first: None,
            after: None,
        };
        let labels = query_labels(&client, params).await.unwrap();
        assert_eq!(labels.nodes[0].name, "bug");

        let requests = stub.requests.lock().unwrap();
        let query = requests[0]["query"].as_str().unwrap();
        assert!(query.contains("issueLabels"));
    }

    #[tokio::test]
    async fn team_listing_scopes_through_team() {
        let stub = Arc::new(StubTransport::new(vec![Ok(json!({
            "data": {"team": {"labels": {"nodes": [],
                      "pageInfo": {"hasNextPage": false, "endCursor": null}}}}
        }))]));
        let client = LinearClient::with_transport(stub.clone());
        let params = ListLabelsParams {
            team_id: Some("t1".to_string()),
            first: None,
            after: None,
        };
        query_labels(&client, params).await.unwrap();

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0]["variables"]["id"], "t1");
    }
}
