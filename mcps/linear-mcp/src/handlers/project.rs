//! Project handler implementations

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::{json, Map};

use crate::linear::{LinearClient, LinearError, LinearResult};
use crate::params::{
    CreateProjectParams, GetProjectParams, ListProjectsParams, UpdateProjectParams,
};
use crate::types::{self, Connection, Project};

use super::{insert_opt, page_size, to_mcp_error};

const GET_PROJECT: &str = r#"
query Project($id: String!) {
    project(id: $id) {
        id name description state progress targetDate createdAt updatedAt
    }
}
"#;

const LIST_PROJECTS: &str = r#"
query Projects(
    $filter: ProjectFilter,
    $first: Int,
    $after: String,
    $includeArchived: Boolean
) {
    projects(
        filter: $filter,
        first: $first,
        after: $after,
        includeArchived: $includeArchived
    ) {
        nodes { id name state progress targetDate createdAt updatedAt }
        pageInfo { hasNextPage endCursor }
    }
}
"#;

const CREATE_PROJECT: &str = r#"
mutation ProjectCreate($input: ProjectCreateInput!) {
    projectCreate(input: $input) {
        success
        project { id name state progress targetDate createdAt updatedAt }
    }
}
"#;

const UPDATE_PROJECT: &str = r#"
mutation ProjectUpdate($id: String!, $input: ProjectUpdateInput!) {
    projectUpdate(id: $id, input: $input) {
        success
        project { id name state progress targetDate createdAt updatedAt }
    }
}
"#;

/// Fetch a project by UUID
pub async fn get_project(
    client: &LinearClient,
    params: GetProjectParams,
) -> Result<CallToolResult, McpError> {
    let project = fetch_project(client, &params.project_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&project)
}

async fn fetch_project(client: &LinearClient, project_id: &str) -> LinearResult<Project> {
    let data = client
        .execute(GET_PROJECT, json!({ "id": project_id }))
        .await?;
    types::decode_at(&data, "/project")
}

/// List projects with optional GraphQL filter passthrough
pub async fn list_projects(
    client: &LinearClient,
    params: ListProjectsParams,
) -> Result<CallToolResult, McpError> {
    let projects = query_projects(client, params).await.map_err(to_mcp_error)?;
    json_success(&projects)
}

async fn query_projects(
    client: &LinearClient,
    params: ListProjectsParams,
) -> LinearResult<Connection<Project>> {
    let first = page_size(params.first, 50)?;
    let variables = json!({
        "filter": params.filter,
        "first": first,
        "after": params.after,
        "includeArchived": params.include_archived.unwrap_or(false),
    });
    let data = client.execute(LIST_PROJECTS, variables).await?;
    types::decode_at(&data, "/projects")
}

/// Create a new project
pub async fn create_project(
    client: &LinearClient,
    params: CreateProjectParams,
) -> Result<CallToolResult, McpError> {
    let project = do_create(client, params).await.map_err(to_mcp_error)?;
    json_success(&project)
}

async fn do_create(client: &LinearClient, params: CreateProjectParams) -> LinearResult<Project> {
    let mut input = Map::new();
    input.insert("name".to_string(), json!(params.name));
    insert_opt(&mut input, "teamIds", params.team_ids);
    insert_opt(&mut input, "description", params.description);
    insert_opt(&mut input, "state", params.state);
    insert_opt(&mut input, "targetDate", params.target_date);

    let data = client
        .execute(CREATE_PROJECT, json!({ "input": input }))
        .await?;
    types::decode_mutation(&data, "projectCreate", "project")
}

/// Update an existing project
pub async fn update_project(
    client: &LinearClient,
    params: UpdateProjectParams,
) -> Result<CallToolResult, McpError> {
    let project = do_update(client, params).await.map_err(to_mcp_error)?;
    json_success(&project)
}

async fn do_update(client: &LinearClient, params: UpdateProjectParams) -> LinearResult<Project> {
    let mut input = Map::new();
    insert_opt(&mut input, "name", params.name);
    insert_opt(&mut input, "description", params.description);
    insert_opt(&mut input, "state", params.state);
    insert_opt(&mut input, "targetDate", params.target_date);

    if input.is_empty() {
        return Err(LinearError::Validation("no fields to update".to_string()));
    }

    let data = client
        .execute(
            UPDATE_PROJECT,
            json!({ "id": params.project_id, "input": input }),
        )
        .await?;
    types::decode_mutation(&data, "projectUpdate", "project")
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
    async fn get_decodes_project() {
        let client = client_with(vec![Ok(json!({
            "data": {"project": {"id": "p1", "name": "Mobile launch", "state": "started"}}
        }))]);
        let project = fetch_project(&client, "p1").await.unwrap();
        assert_eq!(project.name, "Mobile launch");
    }

    #[tokio::test]
    async fn update_with_no_fields_is_validation_error() {
        let client = client_with(vec![]);
        let params = UpdateProjectParams {
            project_id: "p1".to_string(),
            name: None,
            description: None,
            state: None,
            target_date: None,
        };
        let err = do_update(&client, params).await.unwrap_err();
        assert!(matches!(err, LinearError::Validation(_)));
    }
}
