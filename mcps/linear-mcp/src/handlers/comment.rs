//! Comment handler implementations

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::{json, Map};

use crate::linear::{LinearClient, LinearResult};
use crate::params::{CreateCommentParams, ListCommentsParams};
use crate::types::{self, Comment, Connection};

use super::{check_issue_ref, insert_opt, page_size, to_mcp_error};

const LIST_COMMENTS: &str = r#"
query IssueComments($id: String!, $first: Int, $after: String) {
    issue(id: $id) {
        comments(first: $first, after: $after) {
            nodes {
                id body createdAt
                user { name }
            }
            pageInfo { hasNextPage endCursor }
        }
    }
}
"#;

const CREATE_COMMENT: &str = r#"
mutation CommentCreate($input: CommentCreateInput!) {
    commentCreate(input: $input) {
        success
        comment {
            id body createdAt
            user { name }
        }
    }
}
"#;

/// List comments on an issue.
pub(crate) async fn query_comments(
    client: &LinearClient,
    issue_id: &str,
    first: Option<u32>,
    after: Option<String>,
) -> LinearResult<Connection<Comment>> {
    check_issue_ref(issue_id)?;
    let first = page_size(first, 50)?;
    let data = client
        .execute(
            LIST_COMMENTS,
            json!({ "id": issue_id, "first": first, "after": after }),
        )
        .await?;
    types::decode_at(&data, "/issue/comments")
}

/// List comments on an issue
pub async fn list_comments(
    client: &LinearClient,
    params: ListCommentsParams,
) -> Result<CallToolResult, McpError> {
    let comments = query_comments(client, &params.issue_id, params.first, params.after)
        .await
        .map_err(to_mcp_error)?;
    json_success(&comments)
}

/// Add a comment to an issue
pub async fn create_comment(
    client: &LinearClient,
    params: CreateCommentParams,
) -> Result<CallToolResult, McpError> {
    let comment = do_create(client, params).await.map_err(to_mcp_error)?;
    json_success(&comment)
}

async fn do_create(client: &LinearClient, params: CreateCommentParams) -> LinearResult<Comment> {
    check_issue_ref(&params.issue_id)?;

    let mut input = Map::new();
    input.insert("issueId".to_string(), json!(params.issue_id));
    input.insert("body".to_string(), json!(params.body));
    insert_opt(&mut input, "createAsUser", params.create_as_user);
    insert_opt(&mut input, "displayIconUrl", params.display_icon_url);

    let data = client
        .execute(CREATE_COMMENT, json!({ "input": input }))
        .await?;
    types::decode_mutation(&data, "commentCreate", "comment")
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
    async fn list_decodes_nested_connection() {
        let client = client_with(vec![Ok(json!({
            "data": {"issue": {"comments": {
                "nodes": [{"id": "c1", "body": "hi", "user": {"name": "Ada"}}],
                "pageInfo": {"hasNextPage": false, "endCursor": null}
            }}}
        }))]);
        let comments = query_comments(&client, "ENG-1", None, None).await.unwrap();
        assert_eq!(comments.nodes.len(), 1);
        assert_eq!(comments.nodes[0].user.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn list_fails_when_issue_is_missing() {
        let client = client_with(vec![Ok(json!({"data": {"issue": null}}))]);
        let err = query_comments(&client, "ENG-1", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, LinearError::Decode(_)));
    }

    #[tokio::test]
    async fn create_rejects_malformed_issue_reference() {
        let client = client_with(vec![]);
        let params = CreateCommentParams {
            issue_id: "???".to_string(),
            body: "hi".to_string(),
            create_as_user: None,
            display_icon_url: None,
        };
        let err = do_create(&client, params).await.unwrap_err();
        assert!(matches!(err, LinearError::Validation(_)));
    }
}
