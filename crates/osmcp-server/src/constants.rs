//! Server-specific constants
//!
//! Contains constants specific to the MCP server implementation,
//! including JSON-RPC error codes and protocol-related values.

use std::time::Duration;

// ============================================================================
// JSON-RPC ERROR CODES (Standard)
// ============================================================================

/// JSON-RPC Method not found error code
pub const JSONRPC_METHOD_NOT_FOUND: i32 = -32601;

/// JSON-RPC Parse error code
pub const JSONRPC_PARSE_ERROR: i32 = -32700;

/// JSON-RPC Invalid params error code
pub const JSONRPC_INVALID_PARAMS: i32 = -32602;

/// JSON-RPC Internal error code
pub const JSONRPC_INTERNAL_ERROR: i32 = -32603;

// ============================================================================
// JSON-RPC ERROR CODES (Implementation-defined)
// ============================================================================

/// Session referenced by the caller is not registered
pub const JSONRPC_SESSION_NOT_FOUND: i32 = -32001;

// ============================================================================
// SESSION PROTOCOL
// ============================================================================

/// Header carrying the session identifier on requests and responses
pub const SESSION_HEADER: &str = "Mcp-Session-Id";

/// Random bytes per generated session identifier (256 bits)
pub const SESSION_ID_BYTES: usize = 32;

// ============================================================================
// SERVER-PUSH STREAM
// ============================================================================

/// Interval between heartbeat events on the push stream
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);
