//! Attachment handler implementations
//!
//! Attachments link external resources to issues. Linear treats the
//! URL as an idempotent key per issue, so creates with an existing URL
//! update in place.

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::{json, Map};
use url::Url;

use crate::linear::{LinearClient, LinearError, LinearResult};
use crate::params::{
    CreateAttachmentParams, GetAttachmentByUrlParams, GetAttachmentParams, UpdateAttachmentParams,
};
use crate::types::{self, Attachment, Connection};

use super::{check_issue_ref, insert_opt, to_mcp_error};

const GET_ATTACHMENT: &str = r#"
query Attachment($id: String!) {
    attachment(id: $id) { id url title subtitle metadata }
}
"#;

const ATTACHMENTS_FOR_URL: &str = r#"
query AttachmentsByURL($url: String!) {
    attachmentsForURL(url: $url) {
        nodes { id url title subtitle metadata }
    }
}
"#;

const CREATE_ATTACHMENT: &str = r#"
mutation AttachmentCreate($input: AttachmentCreateInput!) {
    attachmentCreate(input: $input) {
        success
        attachment { id url title subtitle metadata }
    }
}
"#;

const UPDATE_ATTACHMENT: &str = r#"
mutation AttachmentUpdate($id: String!, $input: AttachmentUpdateInput!) {
    attachmentUpdate(id: $id, input: $input) {
        success
        attachment { id url title subtitle metadata }
    }
}
"#;

fn check_url(raw: &str) -> Result<(), LinearError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|e| LinearError::Validation(format!("'{raw}' is not a valid URL: {e}")))
}

/// Fetch a single attachment by UUID
pub async fn get_attachment(
    client: &LinearClient,
    params: GetAttachmentParams,
) -> Result<CallToolResult, McpError> {
    let attachment = fetch_attachment(client, &params.attachment_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&attachment)
}

async fn fetch_attachment(
    client: &LinearClient,
    attachment_id: &str,
) -> LinearResult<Attachment> {
    let data = client
        .execute(GET_ATTACHMENT, json!({ "id": attachment_id }))
        .await?;
    types::decode_at(&data, "/attachment")
}

/// Fetch attachments by their external URL (typically one per issue)
pub async fn get_attachment_by_url(
    client: &LinearClient,
    params: GetAttachmentByUrlParams,
) -> Result<CallToolResult, McpError> {
    let attachments = query_by_url(client, &params.url)
        .await
        .map_err(to_mcp_error)?;
    json_success(&attachments)
}

async fn query_by_url(
    client: &LinearClient,
    url: &str,
) -> LinearResult<Connection<Attachment>> {
    check_url(url)?;
    let data = client
        .execute(ATTACHMENTS_FOR_URL, json!({ "url": url }))
        .await?;
    types::decode_at(&data, "/attachmentsForURL")
}

/// Create an attachment on an issue, or update if the URL already exists
pub async fn create_attachment(
    client: &LinearClient,
    params: CreateAttachmentParams,
) -> Result<CallToolResult, McpError> {
    let attachment = do_create(client, params).await.map_err(to_mcp_error)?;
    json_success(&attachment)
}

async fn do_create(
    client: &LinearClient,
    params: CreateAttachmentParams,
) -> LinearResult<Attachment> {
    check_issue_ref(&params.issue_id)?;
    check_url(&params.url)?;

    let mut input = Map::new();
    input.insert("issueId".to_string(), json!(params.issue_id));
    input.insert("url".to_string(), json!(params.url));
    insert_opt(&mut input, "title", params.title);
    insert_opt(&mut input, "subtitle", params.subtitle);
    insert_opt(&mut input, "iconUrl", params.icon_url);
    insert_opt(&mut input, "metadata", params.metadata);
    insert_opt(&mut input, "createAsUser", params.create_as_user);
    insert_opt(&mut input, "displayIconUrl", params.display_icon_url);

    let data = client
        .execute(CREATE_ATTACHMENT, json!({ "input": input }))
        .await?;
    types::decode_mutation(&data, "attachmentCreate", "attachment")
}

/// Update an existing attachment by UUID
pub async fn update_attachment(
    client: &LinearClient,
    params: UpdateAttachmentParams,
) -> Result<CallToolResult, McpError> {
    let attachment = do_update(client, params).await.map_err(to_mcp_error)?;
    json_success(&attachment)
}

async fn do_update(
    client: &LinearClient,
    params: UpdateAttachmentParams,
) -> LinearResult<Attachment> {
    let mut input = Map::new();
    insert_opt(&mut input, "title", params.title);
    insert_opt(&mut input, "subtitle", params.subtitle);
    insert_opt(&mut input, "metadata", params.metadata);

    if input.is_empty() {
        return Err(LinearError::Validation("no fields to update".to_string()));
    }

    let data = client
        .execute(
            UPDATE_ATTACHMENT,
            json!({ "id": params.attachment_id, "input": input }),
        )
        .await?;
    types::decode_mutation(&data, "attachmentUpdate", "attachment")
}
