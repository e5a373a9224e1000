//! Get Mapping Tool Handler
//!
//! Handles the get_mapping MCP tool call by forwarding to the search
//! backend.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use osmcp_domain::ports::SearchBackend;

use crate::args::GetMappingArgs;
use crate::formatter::ResponseFormatter;

/// Handler for index mapping lookups
pub struct GetMappingHandler {
    backend: Arc<dyn SearchBackend>,
}

impl GetMappingHandler {
    /// Create a new get_mapping handler
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Handle the get_mapping tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<GetMappingArgs>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(e) = args.validate() {
            return Ok(ResponseFormatter::invalid_arguments(&e));
        }

        info!(index = %args.index, "Getting index mapping");
        match self.backend.get_mapping(&args.index).await {
            Ok(response) => Ok(ResponseFormatter::text(&response)),
            Err(e) => {
                error!(error = %e, index = %args.index, "Error getting mapping");
                Ok(ResponseFormatter::error(e.to_string()))
            }
        }
    }
}
