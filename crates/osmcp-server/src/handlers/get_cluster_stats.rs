//! Get Cluster Stats Tool Handler
//!
//! Handles the get_cluster_stats MCP tool call by forwarding to the
//! search backend.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tracing::{error, info};

use osmcp_domain::ports::SearchBackend;

use crate::args::GetClusterStatsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for cluster-wide statistics
pub struct GetClusterStatsHandler {
    backend: Arc<dyn SearchBackend>,
}

impl GetClusterStatsHandler {
    /// Create a new get_cluster_stats handler
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Handle the get_cluster_stats tool request
    pub async fn handle(
        &self,
        Parameters(_args): Parameters<GetClusterStatsArgs>,
    ) -> Result<CallToolResult, McpError> {
        info!("Getting cluster stats");
        match self.backend.cluster_stats().await {
            Ok(response) => Ok(ResponseFormatter::text(&response)),
            Err(e) => {
                error!(error = %e, "Error getting cluster stats");
                Ok(ResponseFormatter::error(e.to_string()))
            }
        }
    }
}
