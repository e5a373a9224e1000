//! Search Backend Port
//!
//! Port for the search-cluster client. One long-lived connection object
//! is constructed at startup and shared read-only by every tool handler;
//! implementations must be safe for concurrent invocation.
//!
//! Every operation maps one-to-one onto a cluster API call and returns
//! the raw JSON payload unmodified. The protocol layer is responsible
//! for turning payloads and errors into MCP content items.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Search-cluster backend operations
///
/// ## Thread Safety
///
/// All implementations must be `Send + Sync` for thread-safe sharing
/// across async contexts.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Get health status of the cluster
    async fn cluster_health(&self) -> Result<Value>;

    /// Get cluster-wide statistics
    async fn cluster_stats(&self) -> Result<Value>;

    /// List all indices in the cluster
    async fn list_indices(&self) -> Result<Value>;

    /// Get the mapping for an index
    async fn get_mapping(&self, index: &str) -> Result<Value>;

    /// Get the settings for an index
    async fn get_settings(&self, index: &str) -> Result<Value>;

    /// Search documents in an index with a query DSL body
    async fn search(&self, index: &str, body: Value) -> Result<Value>;
}
