//! Backend configuration types

use crate::constants::{DEFAULT_BACKEND_HOST, DEFAULT_BACKEND_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// Search-cluster backend configuration
///
/// Populated from the `[backend]` section of the config file or from
/// `OPENSEARCH_HOST`, `OPENSEARCH_USERNAME` and `OPENSEARCH_PASSWORD`.
/// Username and password are mandatory; the loader rejects a
/// configuration without them before any connection is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Cluster URL, including scheme and port
    pub host: String,

    /// Basic-auth username
    pub username: String,

    /// Basic-auth password
    pub password: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Verify TLS certificates when connecting to the cluster
    ///
    /// Clusters in development setups commonly run with self-signed
    /// certificates; `false` skips verification for those.
    pub verify_certs: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_BACKEND_HOST.to_string(),
            username: String::new(),
            password: String::new(),
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            verify_certs: false,
        }
    }
}

impl BackendConfig {
    /// Whether both credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}
