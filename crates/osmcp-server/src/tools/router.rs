//! Tool Router Module
//!
//! Routes incoming tool call requests to the appropriate handlers.
//! This module provides a centralized dispatch mechanism for MCP tool calls.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use std::sync::Arc;

use crate::args::{
    GetClusterHealthArgs, GetClusterStatsArgs, GetMappingArgs, GetSettingsArgs, ListIndicesArgs,
    SearchDocumentsArgs,
};
use crate::handlers::{
    GetClusterHealthHandler, GetClusterStatsHandler, GetMappingHandler, GetSettingsHandler,
    ListIndicesHandler, SearchDocumentsHandler,
};

/// Handler references for tool routing
pub struct ToolHandlers {
    /// Handler for cluster health checks
    pub get_cluster_health: Arc<GetClusterHealthHandler>,
    /// Handler for cluster statistics
    pub get_cluster_stats: Arc<GetClusterStatsHandler>,
    /// Handler for index listing
    pub list_indices: Arc<ListIndicesHandler>,
    /// Handler for index mapping lookups
    pub get_mapping: Arc<GetMappingHandler>,
    /// Handler for index settings lookups
    pub get_settings: Arc<GetSettingsHandler>,
    /// Handler for document search
    pub search_documents: Arc<SearchDocumentsHandler>,
}

/// Route a tool call request to the appropriate handler
///
/// Parses the request arguments and delegates to the matching handler.
pub async fn route_tool_call(
    request: CallToolRequestParam,
    handlers: &ToolHandlers,
) -> Result<CallToolResult, McpError> {
    match request.name.as_ref() {
        "get_cluster_health" => {
            let args = parse_args::<GetClusterHealthArgs>(&request)?;
            handlers.get_cluster_health.handle(Parameters(args)).await
        }
        "get_cluster_stats" => {
            let args = parse_args::<GetClusterStatsArgs>(&request)?;
            handlers.get_cluster_stats.handle(Parameters(args)).await
        }
        "list_indices" => {
            let args = parse_args::<ListIndicesArgs>(&request)?;
            handlers.list_indices.handle(Parameters(args)).await
        }
        "get_mapping" => {
            let args = parse_args::<GetMappingArgs>(&request)?;
            handlers.get_mapping.handle(Parameters(args)).await
        }
        "get_settings" => {
            let args = parse_args::<GetSettingsArgs>(&request)?;
            handlers.get_settings.handle(Parameters(args)).await
        }
        "search_documents" => {
            let args = parse_args::<SearchDocumentsArgs>(&request)?;
            handlers.search_documents.handle(Parameters(args)).await
        }
        _ => Err(McpError::invalid_params(
            format!("Unknown tool: {}", request.name),
            None,
        )),
    }
}

/// Parse request arguments into the expected type
fn parse_args<T: serde::de::DeserializeOwned>(
    request: &CallToolRequestParam,
) -> Result<T, McpError> {
    let args_value = serde_json::Value::Object(request.arguments.clone().unwrap_or_default());
    serde_json::from_value(args_value)
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {}", e), None))
}
