//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Protocol-level constants are defined in the server crate.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "osmcp.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "osmcp";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "OSMCP";

/// Environment variable prefix used by the upstream OpenSearch tooling
///
/// `OPENSEARCH_HOST`, `OPENSEARCH_USERNAME` and `OPENSEARCH_PASSWORD`
/// map directly onto the `backend` configuration section.
pub const BACKEND_ENV_PREFIX: &str = "OPENSEARCH";

// ============================================================================
// SERVER DEFAULTS
// ============================================================================

/// Default host the HTTP transport binds to
pub const DEFAULT_BIND_HOST: &str = "127.0.0.1";

/// Default port the HTTP transport listens on
pub const DEFAULT_BIND_PORT: u16 = 8000;

// ============================================================================
// BACKEND DEFAULTS
// ============================================================================

/// Default cluster URL when none is configured
pub const DEFAULT_BACKEND_HOST: &str = "https://localhost:9200";

/// Default backend request timeout in seconds
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOGGING DEFAULTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for log filter overrides
pub const LOG_FILTER_ENV: &str = "OSMCP_LOG";
