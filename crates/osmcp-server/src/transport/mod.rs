//! MCP Transport Layer
//!
//! One canonical transport: streamable HTTP on a single endpoint.
//!
//! | Verb | Path | Purpose |
//! |------|------|---------|
//! | POST | `/mcp` | Submit a JSON-RPC call |
//! | GET | `/mcp` | Open the server-push event stream |
//! | DELETE | `/mcp` | Terminate a session |
//! | GET | `/health` | Fixed status document |
//!
//! Calls are correlated to sessions via the `Mcp-Session-Id` header.

pub mod events;
pub mod http;
pub mod types;

// Re-export transport types
pub use events::{PushEvent, push_events};
pub use http::{HttpTransport, HttpTransportConfig};
pub use types::{McpError, McpRequest, McpResponse};
