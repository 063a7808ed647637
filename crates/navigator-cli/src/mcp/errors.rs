//! Error handling utilities for the MCP server

use navigator_core::NavigatorError;
use rmcp::ErrorData;

/// Convert a navigator error into an MCP error.
///
/// Problems with the caller's input (unknown user, step or template, bad
/// enum values, no matching template) become `invalid_params`; everything
/// else is an internal error.
pub fn to_mcp_error(message: &str, error: &NavigatorError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        NavigatorError::InvalidInput { .. } | NavigatorError::NoMatchingTemplate { .. } => {
            ErrorData::invalid_params(text, None)
        }
        e if e.is_not_found() => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
