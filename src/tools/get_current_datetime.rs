//! Get current datetime tool

use serde_json::{json, Value};

use crate::calendar::Calendar;
use crate::error::ToolResult;
use crate::protocol::{McpTool, Tool};
use crate::tools::ToolArguments;

/// Tool for getting the current date and time in a timezone
pub struct GetCurrentDatetimeTool;

impl GetCurrentDatetimeTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GetCurrentDatetimeTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for GetCurrentDatetimeTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_current_datetime".to_string(),
            "Get the current date and time, with weekday and ISO week number, in a given timezone".to_string(),
            json!({
                "type": "object",
                "properties": {
                    "timezone": {
                        "type": "string",
                        "description": "IANA timezone identifier, e.g. 'Europe/Berlin' (optional, defaults to the system timezone)"
                    }
                },
                "required": []
            }),
        )
    }

    fn execute(&self, calendar: &Calendar, args: &ToolArguments) -> ToolResult<Value> {
        let timezone = args.get_str("timezone")?;
        let now = calendar.current_datetime(timezone);
        Ok(serde_json::to_value(now)?)
    }
}
