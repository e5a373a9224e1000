//! Configuration module
//!
//! Configuration types and the loader that assembles them from
//! defaults, an optional TOML file, and environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, BackendConfig, LoggingConfig, ServerConfig};
