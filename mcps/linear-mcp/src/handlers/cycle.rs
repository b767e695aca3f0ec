//! Cycle handler implementations

use mcp_common::{json_success, CallToolResult, Content, McpError};
use serde_json::json;

use crate::linear::{LinearClient, LinearResult};
use crate::params::{ActiveCycleParams, GetCycleParams, ListCyclesParams};
use crate::types::{self, Connection, Cycle};

use super::{page_size, to_mcp_error};

const LIST_CYCLES: &str = r#"
query TeamCycles($id: String!, $first: Int, $after: String, $includeArchived: Boolean) {
    team(id: $id) {
        cycles(first: $first, after: $after, includeArchived: $includeArchived) {
            nodes { id number name startsAt endsAt progress }
            pageInfo { hasNextPage endCursor }
        }
    }
}
"#;

const GET_CYCLE: &str = r#"
query Cycle($id: String!) {
    cycle(id: $id) { id number name startsAt endsAt progress }
}
"#;

const ACTIVE_CYCLE: &str = r#"
query ActiveCycle($id: String!) {
    team(id: $id) {
        activeCycle { id number name startsAt endsAt progress }
    }
}
"#;

/// List cycles for a team
pub async fn list_cycles(
    client: &LinearClient,
    params: ListCyclesParams,
) -> Result<CallToolResult, McpError> {
    let cycles = query_cycles(client, params).await.map_err(to_mcp_error)?;
    json_success(&cycles)
}

async fn query_cycles(
    client: &LinearClient,
    params: ListCyclesParams,
) -> LinearResult<Connection<Cycle>> {
    let first = page_size(params.first, 25)?;
    let variables = json!({
        "id": params.team_id,
        "first": first,
        "after": params.after,
        "includeArchived": params.include_archived.unwrap_or(false),
    });
    let data = client.execute(LIST_CYCLES, variables).await?;
    types::decode_at(&data, "/team/cycles")
}

/// Fetch a cycle by UUID
pub async fn get_cycle(
    client: &LinearClient,
    params: GetCycleParams,
) -> Result<CallToolResult, McpError> {
    let cycle = fetch_cycle(client, &params.cycle_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&cycle)
}

async fn fetch_cycle(client: &LinearClient, cycle_id: &str) -> LinearResult<Cycle> {
    let data = client.execute(GET_CYCLE, json!({ "id": cycle_id })).await?;
    types::decode_at(&data, "/cycle")
}

/// Fetch the team's currently active cycle, if one exists
pub async fn active_cycle(
    client: &LinearClient,
    params: ActiveCycleParams,
) -> Result<CallToolResult, McpError> {
    let cycle = query_active_cycle(client, &params.team_id)
        .await
        .map_err(to_mcp_error)?;
    match cycle {
        Some(cycle) => json_success(&cycle),
        // A team without an active cycle is a domain outcome, not a
        // protocol failure.
        None => Ok(CallToolResult::error(vec![Content::text(
            "team has no active cycle",
        )])),
    }
}

async fn query_active_cycle(
    client: &LinearClient,
    team_id: &str,
) -> LinearResult<Option<Cycle>> {
    let data = client.execute(ACTIVE_CYCLE, json!({ "id": team_id })).await?;
    types::decode_opt_at(&data, "/team/activeCycle")
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
    async fn list_decodes_team_scoped_connection() {
        let client = client_with(vec![Ok(json!({
            "data": {"team": {"cycles": {
                "nodes": [{"id": "cy1", "number": 3}],
                "pageInfo": {"hasNextPage": false, "endCursor": null}
            }}}
        }))]);
        let params = ListCyclesParams {
            team_id: "t1".to_string(),
            first: None,
            after: None,
            include_archived: None,
        };
        let cycles = query_cycles(&client, params).await.unwrap();
        assert_eq!(cycles.nodes[0].number, 3);
    }

    #[tokio::test]
    async fn missing_active_cycle_is_none() {
        let client = client_with(vec![Ok(json!({"data": {"team": {"activeCycle": null}}}))]);
        let cycle = query_active_cycle(&client, "t1").await.unwrap();
        assert!(cycle.is_none());
    }

    #[tokio::test]
    async fn present_active_cycle_decodes() {
        let client = client_with(vec![Ok(json!({
            "data": {"team": {"activeCycle": {"id": "cy2", "number": 8}}}
        }))]);
        let cycle = query_active_cycle(&client, "t1").await.unwrap();
        assert_eq!(cycle.unwrap().number, 8);
    }
}
