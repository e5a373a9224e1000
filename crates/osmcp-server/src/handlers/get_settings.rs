//! Get Settings Tool Handler
//!
//! Handles the get_settings MCP tool call by forwarding to the search
//! backend.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use osmcp_domain::ports::SearchBackend;

use crate::args::GetSettingsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for index settings lookups
pub struct GetSettingsHandler {
    backend: Arc<dyn SearchBackend>,
}

impl GetSettingsHandler {
    /// Create a new get_settings handler
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Handle the get_settings tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<GetSettingsArgs>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(e) = args.validate() {
            return Ok(ResponseFormatter::invalid_arguments(&e));
        }

        info!(index = %args.index, "Getting index settings");
        match self.backend.get_settings(&args.index).await {
            Ok(response) => Ok(ResponseFormatter::text(&response)),
            Err(e) => {
                error!(error = %e, index = %args.index, "Error getting settings");
                Ok(ResponseFormatter::error(e.to_string()))
            }
        }
    }
}
