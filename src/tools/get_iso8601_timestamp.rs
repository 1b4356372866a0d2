//! Get ISO-8601 timestamp tool

use serde_json::{json, Value};

use crate::calendar::{self, Calendar};
use crate::error::ToolResult;
use crate::protocol::{McpTool, Tool};
use crate::tools::ToolArguments;

/// Tool returning the current UTC time as a bare ISO-8601 string
pub struct GetIso8601TimestampTool;

impl GetIso8601TimestampTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GetIso8601TimestampTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for GetIso8601TimestampTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_iso8601_timestamp".to_string(),
            "Get the current UTC time as an ISO-8601 timestamp".to_string(),
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        )
    }

    fn execute(&self, _calendar: &Calendar, _args: &ToolArguments) -> ToolResult<Value> {
        Ok(Value::String(calendar::iso8601_timestamp()))
    }
}
