//! Main application configuration

use serde::{Deserialize, Serialize};

use super::backend::BackendConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Top-level application configuration
///
/// Assembled by [`crate::config::ConfigLoader`] from defaults, an
/// optional TOML file and environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP transport configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Search-cluster backend configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
