//! Search Documents Tool Handler
//!
//! Handles the search_documents MCP tool call by forwarding the query
//! DSL body to the search backend unmodified.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use osmcp_domain::ports::SearchBackend;

use crate::args::SearchDocumentsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for document search
pub struct SearchDocumentsHandler {
    backend: Arc<dyn SearchBackend>,
}

impl SearchDocumentsHandler {
    /// Create a new search_documents handler
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Handle the search_documents tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<SearchDocumentsArgs>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(e) = args.validate() {
            return Ok(ResponseFormatter::invalid_arguments(&e));
        }
        if !args.has_body() {
            return Ok(ResponseFormatter::error(
                "invalid arguments: body is required",
            ));
        }

        let SearchDocumentsArgs { index, body } = args;
        info!(index = %index, "Searching documents");
        match self.backend.search(&index, body).await {
            Ok(response) => Ok(ResponseFormatter::text(&response)),
            Err(e) => {
                error!(error = %e, index = %index, "Error searching documents");
                Ok(ResponseFormatter::error(e.to_string()))
            }
        }
    }
}
