//! Server configuration types

use crate::constants::{DEFAULT_BIND_HOST, DEFAULT_BIND_PORT};
use serde::{Deserialize, Serialize};

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_BIND_PORT,
        }
    }
}
