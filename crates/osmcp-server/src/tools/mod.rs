//! Tool Registry and Routing
//!
//! Centralized tool metadata and dispatch for the MCP protocol layer.

pub mod registry;
pub mod router;

pub use registry::{ToolDefinitions, create_tool_list};
pub use router::{ToolHandlers, route_tool_call};
