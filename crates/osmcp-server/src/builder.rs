//! MCP Server Builder
//!
//! Builder pattern for constructing MCP servers with dependency injection.
//! Ensures the backend connection is provided before server construction.

use crate::McpServer;
use osmcp_domain::ports::SearchBackend;
use std::sync::Arc;

/// Builder for MCP Server with dependency injection
///
/// Makes server construction explicit and testable: handlers receive
/// whatever backend the caller injects, real or mock.
#[derive(Default)]
pub struct McpServerBuilder {
    backend: Option<Arc<dyn SearchBackend>>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend connection
    ///
    /// # Arguments
    /// * `backend` - Implementation of the search backend port
    pub fn with_backend(mut self, backend: Arc<dyn SearchBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if the backend is not provided
    pub fn try_build(self) -> Result<McpServer, BuilderError> {
        let backend = self
            .backend
            .ok_or(BuilderError::MissingDependency("backend"))?;

        Ok(McpServer::new(backend))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
