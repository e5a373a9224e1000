//! Tool Registry Module
//!
//! Manages tool definitions and schema generation for the MCP protocol.
//! The registry is built once during initialization and treated as
//! immutable afterwards; both `tools/list` responses and the dispatch
//! table derive from it.

use rmcp::ErrorData as McpError;
use rmcp::model::Tool;
use std::borrow::Cow;
use std::sync::Arc;

use crate::args::{
    GetClusterHealthArgs, GetClusterStatsArgs, GetMappingArgs, GetSettingsArgs, ListIndicesArgs,
    SearchDocumentsArgs,
};

/// Tool definitions for MCP protocol
pub struct ToolDefinitions;

impl ToolDefinitions {
    /// Get the get_cluster_health tool definition
    pub fn get_cluster_health() -> Result<Tool, McpError> {
        Self::create_tool(
            "get_cluster_health",
            "Get health status of the OpenSearch cluster",
            schemars::schema_for!(GetClusterHealthArgs),
        )
    }

    /// Get the get_cluster_stats tool definition
    pub fn get_cluster_stats() -> Result<Tool, McpError> {
        Self::create_tool(
            "get_cluster_stats",
            "Get statistics from a cluster-wide perspective, including node, shard and store metrics",
            schemars::schema_for!(GetClusterStatsArgs),
        )
    }

    /// Get the list_indices tool definition
    pub fn list_indices() -> Result<Tool, McpError> {
        Self::create_tool(
            "list_indices",
            "List all indices in the OpenSearch cluster",
            schemars::schema_for!(ListIndicesArgs),
        )
    }

    /// Get the get_mapping tool definition
    pub fn get_mapping() -> Result<Tool, McpError> {
        Self::create_tool(
            "get_mapping",
            "Get the field mapping for an index",
            schemars::schema_for!(GetMappingArgs),
        )
    }

    /// Get the get_settings tool definition
    pub fn get_settings() -> Result<Tool, McpError> {
        Self::create_tool(
            "get_settings",
            "Get the settings for an index",
            schemars::schema_for!(GetSettingsArgs),
        )
    }

    /// Get the search_documents tool definition
    pub fn search_documents() -> Result<Tool, McpError> {
        Self::create_tool(
            "search_documents",
            "Search documents in an index with a custom query DSL body",
            schemars::schema_for!(SearchDocumentsArgs),
        )
    }

    /// Create a tool from schema
    fn create_tool(
        name: &'static str,
        description: &'static str,
        schema: schemars::Schema,
    ) -> Result<Tool, McpError> {
        let schema_value = serde_json::to_value(schema)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let input_schema = schema_value
            .as_object()
            .ok_or_else(|| {
                McpError::internal_error(format!("Schema for {} is not an object", name), None)
            })?
            .clone();

        Ok(Tool {
            name: Cow::Borrowed(name),
            title: None,
            description: Some(Cow::Borrowed(description)),
            input_schema: Arc::new(input_schema),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: Default::default(),
        })
    }
}

/// Create the complete list of available tools
///
/// Returns all tool definitions for the MCP list_tools response.
pub fn create_tool_list() -> Result<Vec<Tool>, McpError> {
    Ok(vec![
        ToolDefinitions::get_cluster_health()?,
        ToolDefinitions::get_cluster_stats()?,
        ToolDefinitions::list_indices()?,
        ToolDefinitions::get_mapping()?,
        ToolDefinitions::get_settings()?,
        ToolDefinitions::search_documents()?,
    ])
}
