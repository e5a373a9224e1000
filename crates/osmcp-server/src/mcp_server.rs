//! MCP Server Implementation
//!
//! Core MCP protocol server exposing OpenSearch cluster operations as
//! tools. It depends only on the backend port and receives the
//! connection through constructor injection.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};

use osmcp_domain::ports::SearchBackend;

use crate::handlers::{
    GetClusterHealthHandler, GetClusterStatsHandler, GetMappingHandler, GetSettingsHandler,
    ListIndicesHandler, SearchDocumentsHandler,
};
use crate::tools::{ToolHandlers, create_tool_list, route_tool_call};

/// Core MCP server implementation
///
/// Owns the shared backend handle and one handler per tool. The server
/// is cheap to clone; all state is behind `Arc`s.
#[derive(Clone)]
pub struct McpServer {
    /// Shared connection to the search cluster
    backend: Arc<dyn SearchBackend>,
    /// Handler for cluster health checks
    get_cluster_health_handler: Arc<GetClusterHealthHandler>,
    /// Handler for cluster statistics
    get_cluster_stats_handler: Arc<GetClusterStatsHandler>,
    /// Handler for index listing
    list_indices_handler: Arc<ListIndicesHandler>,
    /// Handler for index mapping lookups
    get_mapping_handler: Arc<GetMappingHandler>,
    /// Handler for index settings lookups
    get_settings_handler: Arc<GetSettingsHandler>,
    /// Handler for document search
    search_documents_handler: Arc<SearchDocumentsHandler>,
}

impl McpServer {
    /// Create a new MCP server with the injected backend connection
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        let get_cluster_health_handler = Arc::new(GetClusterHealthHandler::new(backend.clone()));
        let get_cluster_stats_handler = Arc::new(GetClusterStatsHandler::new(backend.clone()));
        let list_indices_handler = Arc::new(ListIndicesHandler::new(backend.clone()));
        let get_mapping_handler = Arc::new(GetMappingHandler::new(backend.clone()));
        let get_settings_handler = Arc::new(GetSettingsHandler::new(backend.clone()));
        let search_documents_handler = Arc::new(SearchDocumentsHandler::new(backend.clone()));

        Self {
            backend,
            get_cluster_health_handler,
            get_cluster_stats_handler,
            list_indices_handler,
            get_mapping_handler,
            get_settings_handler,
            search_documents_handler,
        }
    }

    /// Access to the backend connection
    pub fn backend(&self) -> Arc<dyn SearchBackend> {
        Arc::clone(&self.backend)
    }

    /// Handler references for the HTTP transport's dispatch table
    pub fn tool_handlers(&self) -> ToolHandlers {
        ToolHandlers {
            get_cluster_health: Arc::clone(&self.get_cluster_health_handler),
            get_cluster_stats: Arc::clone(&self.get_cluster_stats_handler),
            list_indices: Arc::clone(&self.list_indices_handler),
            get_mapping: Arc::clone(&self.get_mapping_handler),
            get_settings: Arc::clone(&self.get_settings_handler),
            search_documents: Arc::clone(&self.search_documents_handler),
        }
    }
}

impl ServerHandler for McpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "OpenSearch MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "OpenSearch MCP Server\n\n\
                 Exposes OpenSearch cluster operations as MCP tools.\n\n\
                 Tools:\n\
                 - get_cluster_health: Health status of the cluster\n\
                 - get_cluster_stats: Cluster-wide statistics\n\
                 - list_indices: List all indices\n\
                 - get_mapping: Field mapping for an index\n\
                 - get_settings: Settings for an index\n\
                 - search_documents: Search an index with a query DSL body\n"
                    .to_string(),
            ),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = create_tool_list()?;
        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    async fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let handlers = self.tool_handlers();
        route_tool_call(request, &handlers).await
    }
}
