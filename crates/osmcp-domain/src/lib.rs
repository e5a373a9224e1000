//! # OpenSearch MCP Server Domain Layer
//!
//! Core contracts shared by every layer of the OpenSearch MCP server:
//! the crate-wide error type and the port trait for the search-cluster
//! backend. This crate is free of transport and provider concerns.

pub mod error;
pub mod ports;

pub use error::{Error, Result};
pub use ports::SearchBackend;
