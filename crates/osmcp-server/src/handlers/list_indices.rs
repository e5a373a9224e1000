//! List Indices Tool Handler
//!
//! Handles the list_indices MCP tool call by forwarding to the search
//! backend.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tracing::{error, info};

use osmcp_domain::ports::SearchBackend;

use crate::args::ListIndicesArgs;
use crate::formatter::ResponseFormatter;

/// Handler for index listing
pub struct ListIndicesHandler {
    backend: Arc<dyn SearchBackend>,
}

impl ListIndicesHandler {
    /// Create a new list_indices handler
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Handle the list_indices tool request
    pub async fn handle(
        &self,
        Parameters(_args): Parameters<ListIndicesArgs>,
    ) -> Result<CallToolResult, McpError> {
        info!("Listing indices");
        match self.backend.list_indices().await {
            Ok(response) => Ok(ResponseFormatter::text(&response)),
            Err(e) => {
                error!(error = %e, "Error listing indices");
                Ok(ResponseFormatter::error(e.to_string()))
            }
        }
    }
}
