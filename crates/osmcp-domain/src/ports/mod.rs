//! Domain Ports
//!
//! Trait boundaries between the MCP protocol layer and the external
//! systems it forwards to. Implementations live in provider crates.

pub mod backend;

pub use backend::SearchBackend;
