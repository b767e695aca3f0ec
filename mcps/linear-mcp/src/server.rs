//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes Linear
//! operations as tools. Handler implementations are in the handlers/
//! module; this file only maps tool names and descriptions onto them.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::config::Config;
use crate::handlers;
use crate::linear::LinearClient;
use crate::params::*;

/// The main Linear MCP Server
#[derive(Clone)]
pub struct LinearMcpServer {
    client: LinearClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LinearMcpServer {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = LinearClient::new(config)?;
        Ok(Self {
            client,
            tool_router: Self::tool_router(),
        })
    }

    // ========================================================================
    // Issue Tools
    // ========================================================================

    #[tool(
        description = "Fetch a Linear issue by UUID or identifier (e.g. 'ENG-123'), including its description"
    )]
    async fn linear_get_issue(
        &self,
        Parameters(params): Parameters<GetIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_issue(&self.client, params).await
    }

    #[tool(
        description = "List Linear issues with an optional IssueFilter passthrough, pagination, and sort order"
    )]
    async fn linear_list_issues(
        &self,
        Parameters(params): Parameters<ListIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_issues(&self.client, params).await
    }

    #[tool(description = "Create a new Linear issue in a team")]
    async fn linear_create_issue(
        &self,
        Parameters(params): Parameters<CreateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_issue(&self.client, params).await
    }

    #[tool(
        description = "Update an existing Linear issue; only the supplied fields are changed"
    )]
    async fn linear_update_issue(
        &self,
        Parameters(params): Parameters<UpdateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_issue(&self.client, params).await
    }

    // ========================================================================
    // Comment Tools
    // ========================================================================

    #[tool(description = "List comments on a Linear issue")]
    async fn linear_list_comments(
        &self,
        Parameters(params): Parameters<ListCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_comments(&self.client, params).await
    }

    #[tool(description = "Add a comment to a Linear issue (markdown supported)")]
    async fn linear_create_comment(
        &self,
        Parameters(params): Parameters<CreateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_comment(&self.client, params).await
    }

    // ========================================================================
    // Project Tools
    // ========================================================================

    #[tool(description = "Fetch a Linear project by UUID, including its description")]
    async fn linear_get_project(
        &self,
        Parameters(params): Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_project(&self.client, params).await
    }

    #[tool(description = "List Linear projects with an optional ProjectFilter passthrough")]
    async fn linear_list_projects(
        &self,
        Parameters(params): Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_projects(&self.client, params).await
    }

    #[tool(description = "Create a new Linear project")]
    async fn linear_create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_project(&self.client, params).await
    }

    #[tool(
        description = "Update an existing Linear project; only the supplied fields are changed"
    )]
    async fn linear_update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_project(&self.client, params).await
    }

    // ========================================================================
    // Cycle Tools
    // ========================================================================

    #[tool(description = "List cycles for a Linear team")]
    async fn linear_list_cycles(
        &self,
        Parameters(params): Parameters<ListCyclesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_cycles(&self.client, params).await
    }

    #[tool(description = "Fetch a Linear cycle by UUID")]
    async fn linear_get_cycle(
        &self,
        Parameters(params): Parameters<GetCycleParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_cycle(&self.client, params).await
    }

    #[tool(description = "Fetch the currently active cycle for a Linear team")]
    async fn linear_active_cycle(
        &self,
        Parameters(params): Parameters<ActiveCycleParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::active_cycle(&self.client, params).await
    }

    // ========================================================================
    // Team Tools
    // ========================================================================

    #[tool(description = "List all Linear teams in the workspace")]
    async fn linear_list_teams(
        &self,
        Parameters(params): Parameters<ListTeamsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_teams(&self.client, params).await
    }

    #[tool(description = "Fetch a Linear team by UUID")]
    async fn linear_get_team(
        &self,
        Parameters(params): Parameters<GetTeamParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_team(&self.client, params).await
    }

    #[tool(
        description = "List workflow states for a Linear team; issue mutations require a state UUID from this list"
    )]
    async fn linear_list_team_states(
        &self,
        Parameters(params): Parameters<ListTeamStatesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_team_states(&self.client, params).await
    }

    // ========================================================================
    // User Tools
    // ========================================================================

    #[tool(description = "Fetch the authenticated user's Linear profile")]
    async fn linear_whoami(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::whoami(&self.client).await
    }

    #[tool(description = "List Linear workspace members")]
    async fn linear_list_users(
        &self,
        Parameters(params): Parameters<ListUsersParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_users(&self.client, params).await
    }

    // ========================================================================
    // Label Tools
    // ========================================================================

    #[tool(description = "List Linear labels for the workspace or a single team")]
    async fn linear_list_labels(
        &self,
        Parameters(params): Parameters<ListLabelsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_labels(&self.client, params).await
    }

    #[tool(description = "Create a new Linear label at team or workspace scope")]
    async fn linear_create_label(
        &self,
        Parameters(params): Parameters<CreateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_label(&self.client, params).await
    }

    // ========================================================================
    // Search Tools
    // ========================================================================

    #[tool(
        description = "Search Linear issues with free-form text; results are ranked by the API"
    )]
    async fn linear_search_issues(
        &self,
        Parameters(params): Parameters<SearchIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_issues(&self.client, params).await
    }

    // ========================================================================
    // Attachment Tools
    // ========================================================================

    #[tool(description = "Fetch a Linear attachment by UUID")]
    async fn linear_get_attachment(
        &self,
        Parameters(params): Parameters<GetAttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_attachment(&self.client, params).await
    }

    #[tool(description = "Fetch Linear attachments by their external URL")]
    async fn linear_get_attachment_by_url(
        &self,
        Parameters(params): Parameters<GetAttachmentByUrlParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_attachment_by_url(&self.client, params).await
    }

    #[tool(
        description = "Link an external URL to a Linear issue; re-creating with the same URL updates in place"
    )]
    async fn linear_create_attachment(
        &self,
        Parameters(params): Parameters<CreateAttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_attachment(&self.client, params).await
    }

    #[tool(
        description = "Update an existing Linear attachment; only the supplied fields are changed"
    )]
    async fn linear_update_attachment(
        &self,
        Parameters(params): Parameters<UpdateAttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_attachment(&self.client, params).await
    }

    // ========================================================================
    // Compound Tools
    // ========================================================================

    #[tool(
        description = "Fetch full context for a Linear issue in one call: details, comments, and the team's workflow states"
    )]
    async fn linear_issue_context(
        &self,
        Parameters(params): Parameters<IssueContextParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::issue_context(&self.client, params).await
    }

    #[tool(description = "List Linear issues assigned to the authenticated user")]
    async fn linear_my_issues(
        &self,
        Parameters(params): Parameters<MyIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::my_issues(&self.client, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for LinearMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Linear MCP Server - provides typed tools for Linear issue tracking \
                 over its GraphQL API: issues, comments, projects, cycles, teams, \
                 users, labels, search, and attachments. Requires a delegated OAuth \
                 access token in LINEAR_ACCESS_TOKEN."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
