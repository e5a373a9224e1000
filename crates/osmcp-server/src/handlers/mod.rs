//! MCP Tool Handlers
//!
//! Implementations of MCP tool calls. Each handler forwards one request
//! to the search backend and converts the payload or failure into a
//! uniform content result; nothing is retried or transformed beyond
//! stringification.

pub mod get_cluster_health;
pub mod get_cluster_stats;
pub mod get_mapping;
pub mod get_settings;
pub mod list_indices;
pub mod search_documents;

// Re-export handlers for convenience
pub use get_cluster_health::GetClusterHealthHandler;
pub use get_cluster_stats::GetClusterStatsHandler;
pub use get_mapping::GetMappingHandler;
pub use get_settings::GetSettingsHandler;
pub use list_indices::ListIndicesHandler;
pub use search_documents::SearchDocumentsHandler;
