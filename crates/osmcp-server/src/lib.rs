//! # OpenSearch MCP Server
//!
//! MCP protocol server exposing OpenSearch cluster operations as tools.
//!
//! Every tool is a pass-through: it invokes exactly one backend
//! operation and returns the stringified response (or the failure
//! message) as a single text content item. The interesting part of the
//! crate is the transport: session-correlated dispatch over a single
//! streamable HTTP endpoint, with a server-push event stream.
//!
//! ## Tools
//!
//! | Tool | Parameters | Backend call |
//! |------|------------|--------------|
//! | `get_cluster_health` | — | `GET /_cluster/health` |
//! | `get_cluster_stats` | — | `GET /_cluster/stats` |
//! | `list_indices` | — | `GET /_cat/indices` |
//! | `get_mapping` | `index` | `GET /{index}/_mapping` |
//! | `get_settings` | `index` | `GET /{index}/_settings` |
//! | `search_documents` | `index`, `body` | `POST /{index}/_search` |
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`McpServer`] | Main server struct |
//! | [`McpServerBuilder`] | Builder for server configuration |

// Allow Rust 2024 compatibility issues from Rocket's EventStream macro
#![allow(rust_2024_compatibility)]

pub mod args;
pub mod builder;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod session;
pub mod tools;
pub mod transport;

// Re-export core types for public API
pub use builder::McpServerBuilder;
pub use init::run;
pub use mcp_server::McpServer;
