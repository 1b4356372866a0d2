//! Add days tool

use serde_json::{json, Value};

use crate::calendar::{self, Calendar};
use crate::error::ToolResult;
use crate::protocol::{McpTool, Tool};
use crate::tools::ToolArguments;

/// Tool for shifting a date forwards or backwards by whole days
pub struct AddDaysTool;

impl AddDaysTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddDaysTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for AddDaysTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "add_days".to_string(),
            "Add or subtract a number of days from a date".to_string(),
            // "days" is listed as required but still defaults to 0 when omitted
            json!({
                "type": "object",
                "properties": {
                    "date": {
                        "type": "string",
                        "description": "Base date in YYYY-MM-DD format (optional, defaults to today)"
                    },
                    "days": {
                        "type": "integer",
                        "description": "Number of days to add; negative values subtract"
                    }
                },
                "required": ["days"]
            }),
        )
    }

    fn execute(&self, calendar: &Calendar, args: &ToolArguments) -> ToolResult<Value> {
        let date = calendar.resolve_date(args.get_str("date")?);
        let days = args.get_i64("days")?.unwrap_or(0);
        let shift = calendar::add_days(date, days)?;
        Ok(serde_json::to_value(shift)?)
    }
}
