//! Team handler implementations

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::json;

use crate::linear::{LinearClient, LinearResult};
use crate::params::{GetTeamParams, ListTeamsParams, ListTeamStatesParams};
use crate::types::{self, Connection, Team, WorkflowState};

use super::{page_size, to_mcp_error};

const LIST_TEAMS: &str = r#"
query Teams($first: Int, $after: String) {
    teams(first: $first, after: $after) {
        nodes { id name key }
        pageInfo { hasNextPage endCursor }
    }
}
"#;

const GET_TEAM: &str = r#"
query Team($id: String!) {
    team(id: $id) { id name key }
}
"#;

const TEAM_STATES: &str = r#"
query TeamStates($id: String!) {
    team(id: $id) {
        states {
            nodes { id name type color position }
        }
    }
}
"#;

/// List workflow states for a team.
///
/// Issue mutations require a state UUID, so this is the lookup that
/// makes state changes possible.
pub(crate) async fn query_team_states(
    client: &LinearClient,
    team_id: &str,
) -> LinearResult<Connection<WorkflowState>> {
    let data = client.execute(TEAM_STATES, json!({ "id": team_id })).await?;
    types::decode_at(&data, "/team/states")
}

/// List all teams in the workspace
pub async fn list_teams(
    client: &LinearClient,
    params: ListTeamsParams,
) -> Result<CallToolResult, McpError> {
    let teams = query_teams(client, params).await.map_err(to_mcp_error)?;
    json_success(&teams)
}

async fn query_teams(
    client: &LinearClient,
    params: ListTeamsParams,
) -> LinearResult<Connection<Team>> {
    let first = page_size(params.first, 50)?;
    let data = client
        .execute(LIST_TEAMS, json!({ "first": first, "after": params.after }))
        .await?;
    types::decode_at(&data, "/teams")
}

/// Fetch a team by UUID
pub async fn get_team(
    client: &LinearClient,
    params: GetTeamParams,
) -> Result<CallToolResult, McpError> {
    let team = fetch_team(client, &params.team_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&team)
}

async fn fetch_team(client: &LinearClient, team_id: &str) -> LinearResult<Team> {
    let data = client.execute(GET_TEAM, json!({ "id": team_id })).await?;
    types::decode_at(&data, "/team")
}

/// List workflow states (statuses) for a team
pub async fn list_team_states(
    client: &LinearClient,
    params: ListTeamStatesParams,
) -> Result<CallToolResult, McpError> {
    let states = query_team_states(client, &params.team_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&states)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::linear::transport::testing::StubTransport;
    use crate::linear::LinearError;

    fn client_with(responses: Vec<LinearResult<Value>>) -> LinearClient {
        LinearClient::with_transport(Arc::new(StubTransport::new(responses)))
    }

    #[tokio::test]
    async fn states_decode_with_type_field() {
        let client = client_with(vec![Ok(json!({
            "data": {"team": {"states": {"nodes": [
                {"id": "s1", "name": "Backlog", "type": "backlog", "position": 0.0},
                {"id": "s2", "name": "In Progress", "type": "started", "position": 2.0}
            ]}}}
        }))]);
        let states = query_team_states(&client, "t1").await.unwrap();
        assert_eq!(states.nodes.len(), 2);
        assert_eq!(states.nodes[1].state_type, "started");
    }

    #[tokio::test]
    async fn missing_team_is_decode_failure() {
        let client = client_with(vec![Ok(json!({"data": {"team": null}}))]);
        let err = query_team_states(&client, "t1").await.unwrap_err();
        assert!(matches!(err, LinearError::Decode(_)));
    }
}
