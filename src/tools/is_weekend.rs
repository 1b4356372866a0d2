//! Is weekend tool

use serde_json::{json, Value};

use crate::calendar::{self, Calendar};
use crate::error::ToolResult;
use crate::protocol::{McpTool, Tool};
use crate::tools::ToolArguments;

/// Tool for checking whether a date falls on Saturday or Sunday
pub struct IsWeekendTool;

impl IsWeekendTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IsWeekendTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for IsWeekendTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "is_weekend".to_string(),
            "Check whether a date falls on a weekend".to_string(),
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
        Ok(serde_json::to_value(calendar::is_weekend(date))?)
    }
}
