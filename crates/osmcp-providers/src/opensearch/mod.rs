//! OpenSearch backend provider

pub mod client;

pub use client::OpenSearchClient;
