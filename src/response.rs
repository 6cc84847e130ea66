//! Tool response helpers
//!
//! Every handler failure is reported in-band as readable text content with
//! the error flag set, never as a transport-level fault, so the calling
//! agent always receives a response it can reason about.

use rmcp::model::{CallToolResult, Content};

/// A successful plain-text tool response
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// An in-band error response carrying readable text
pub fn text_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}
