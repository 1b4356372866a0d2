//! Get week number tool

use serde_json::{json, Value};

use crate::calendar::{self, Calendar};
use crate::error::ToolResult;
use crate::protocol::{McpTool, Tool};
use crate::tools::ToolArguments;

/// Tool for getting the ISO-8601 week number of a date
pub struct GetWeekNumberTool;

impl GetWeekNumberTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GetWeekNumberTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for GetWeekNumberTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_week_number".to_string(),
            "Get the ISO-8601 week number for a date".to_string(),
            json!({
                "type": "object",
                "properties": {
                    "date": {
                        "type": "string",
                        "description": "Date in YYYY-MM-DD format (optional, defaults to today)"
                    }
                },
                "required": []
            }),
        )
    }

    fn execute(&self, calendar: &Calendar, args: &ToolArguments) -> ToolResult<Value> {
        let date = calendar.resolve_date(args.get_str("date")?);
        Ok(serde_json::to_value(calendar::week_number(date))?)
    }
}
