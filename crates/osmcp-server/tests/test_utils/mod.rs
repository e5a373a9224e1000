//! Test utilities for osmcp-server
//!
//! Provides a mock backend implementation and content-extraction
//! helpers shared by handler and transport tests.

#![allow(dead_code)]


/// Extract text content from CallToolResult content vector
pub fn extract_text_content(content: &[rmcp::model::Content]) -> String {
    content
        .iter()
        .filter_map(|c| {
            // Content can be serialized to JSON and we can extract text from there
            if let Ok(json) = serde_json::to_value(c) {
                if let Some(text) = json.get("text") {
                    return text.as_str().map(|s| s.to_string());
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join("\n")
}
