//! Server Initialization
//!
//! Handles server startup: configuration loading, logging, backend
//! client construction and HTTP transport launch.
//!
//! Configuration errors are startup-fatal; they propagate out of
//! [`run`] so the binary exits non-zero before any socket is bound.
//! Once the transport is serving, failures are handled per request and
//! never terminate the process.

use std::path::Path;
use std::sync::Arc;

use osmcp_domain::ports::SearchBackend;
use osmcp_infrastructure::config::{AppConfig, ConfigLoader};
use osmcp_providers::OpenSearchClient;
use tracing::info;

use crate::McpServerBuilder;
use crate::transport::http::{HttpTransport, HttpTransportConfig};

/// Run the OpenSearch MCP server
///
/// This is the main entry point that initializes all components and
/// starts the HTTP transport. CLI overrides take precedence over the
/// configuration file and environment.
pub async fn run(
    config_path: Option<&Path>,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;
    if let Some(host) = host_override {
        config.server.host = host;
    }
    if let Some(port) = port_override {
        config.server.port = port;
    }

    osmcp_infrastructure::logging::init_logging(config.logging.clone())?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        backend = %config.backend.host,
        "Starting OpenSearch MCP server"
    );

    // The one backend connection, shared by every handler. Construction
    // re-checks credentials so the process aborts here, not mid-request.
    let backend: Arc<dyn SearchBackend> = Arc::new(OpenSearchClient::new(&config.backend)?);

    let server = McpServerBuilder::new().with_backend(backend).try_build()?;
    info!("MCP server initialized successfully");

    let http_config = HttpTransportConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        enable_cors: true,
    };
    let transport = HttpTransport::new(http_config, Arc::new(server));
    transport
        .start()
        .await
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
