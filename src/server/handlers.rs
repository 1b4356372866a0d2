//! Request helpers for the MCP server
//!
//! Parameter extraction for tools/call and the MCP content wrapping
//! applied to every tool result.

use serde_json::Value;

use crate::error::ToolResult;

/// Extract tool arguments from params; `None` when absent
pub fn extract_arguments(params: &Value) -> Option<Value> {
    params.get("arguments").cloned()
}

/// Extract tool name from params
pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// Build a text content response
pub fn text_response(text: String) -> Value {
    serde_json::json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

/// Wrap a raw tool result as MCP text content.
///
/// Strings pass through verbatim, anything else is rendered as JSON text.
pub fn content_response(result: Value) -> ToolResult<Value> {
    let text = match result {
        Value::String(text) => text,
        other => serde_json::to_string_pretty(&other)?,
    };
    Ok(text_response(text))
}
