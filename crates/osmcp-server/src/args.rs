//! Tool Argument Types
//!
//! Typed argument structs for every MCP tool, with schema generation
//! for the tool registry and validation at the handler boundary.
//!
//! Required string parameters default to empty and are rejected by
//! validation, so a missing parameter surfaces as an error content
//! item instead of a deserialization failure.

use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// Arguments for the `get_cluster_health` tool
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetClusterHealthArgs {}

/// Arguments for the `get_cluster_stats` tool
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetClusterStatsArgs {}

/// Arguments for the `list_indices` tool
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListIndicesArgs {}

/// Arguments for the `get_mapping` tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct GetMappingArgs {
    /// Name of the index
    #[serde(default)]
    #[schemars(description = "Name of the index")]
    #[validate(length(min = 1, message = "index is required"))]
    pub index: String,
}

/// Arguments for the `get_settings` tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct GetSettingsArgs {
    /// Name of the index
    #[serde(default)]
    #[schemars(description = "Name of the index")]
    #[validate(length(min = 1, message = "index is required"))]
    pub index: String,
}

/// Arguments for the `search_documents` tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct SearchDocumentsArgs {
    /// Name of the index to search
    #[serde(default)]
    #[schemars(description = "Name of the index to search")]
    #[validate(length(min = 1, message = "index is required"))]
    pub index: String,

    /// Query DSL body forwarded to the cluster unmodified
    #[serde(default)]
    #[schemars(description = "Search query DSL body")]
    pub body: serde_json::Value,
}

impl SearchDocumentsArgs {
    /// Whether a query body was supplied
    pub fn has_body(&self) -> bool {
        !self.body.is_null()
    }
}
