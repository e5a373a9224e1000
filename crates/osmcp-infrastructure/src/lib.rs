//! # OpenSearch MCP Server Infrastructure Layer
//!
//! Cross-cutting technical concerns for the OpenSearch MCP server:
//! configuration loading (defaults, TOML file, environment variables),
//! structured logging initialization, and error-context utilities.
//!
//! This crate knows nothing about the MCP protocol or the backend
//! client; it only provides the plumbing both depend on.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use logging::init_logging;
