//! # OpenSearch MCP Server Providers
//!
//! Concrete implementations of the domain ports. Currently a single
//! provider: the OpenSearch HTTP client implementing
//! [`osmcp_domain::SearchBackend`] over `reqwest`.

pub mod opensearch;

pub use opensearch::OpenSearchClient;
