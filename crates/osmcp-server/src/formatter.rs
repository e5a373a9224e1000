//! Response Formatter
//!
//! Uniform construction of MCP tool results. Every tool returns exactly
//! one text content item; failures use the same envelope with an
//! `"Error: "` marker and `is_error` set, per MCP convention.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// Formats backend payloads and failures into MCP content
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format a backend JSON payload as a single text content item
    pub fn text(value: &Value) -> CallToolResult {
        let text =
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        CallToolResult::success(vec![Content::text(text)])
    }

    /// Format a failure as an error content item
    ///
    /// The message keeps the backend's wording so callers can see the
    /// cluster's own failure reason.
    pub fn error(message: impl Into<String>) -> CallToolResult {
        CallToolResult::error(vec![Content::text(format!("Error: {}", message.into()))])
    }

    /// Format an argument validation failure as an error content item
    pub fn invalid_arguments(errors: &validator::ValidationErrors) -> CallToolResult {
        Self::error(format!("invalid arguments: {errors}"))
    }
}
