//! Get Cluster Health Tool Handler
//!
//! Handles the get_cluster_health MCP tool call by forwarding to the
//! search backend.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tracing::{error, info};

use osmcp_domain::ports::SearchBackend;

use crate::args::GetClusterHealthArgs;
use crate::formatter::ResponseFormatter;

/// Handler for cluster health checks
pub struct GetClusterHealthHandler {
    backend: Arc<dyn SearchBackend>,
}

impl GetClusterHealthHandler {
    /// Create a new get_cluster_health handler
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Handle the get_cluster_health tool request
    pub async fn handle(
        &self,
        Parameters(_args): Parameters<GetClusterHealthArgs>,
    ) -> Result<CallToolResult, McpError> {
        info!("Getting cluster health");
        match self.backend.cluster_health().await {
            Ok(response) => Ok(ResponseFormatter::text(&response)),
            Err(e) => {
                error!(error = %e, "Error getting cluster health");
                Ok(ResponseFormatter::error(e.to_string()))
            }
        }
    }
}
