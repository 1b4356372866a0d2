//! MCP Tools implementation
//!
//! The catalog is closed: every callable tool is a [`ToolName`] variant
//! mapped to its handler, and discovery lists them in declaration order.
//! - get_current_datetime, get_iso8601_timestamp: clock readings
//! - add_days, is_weekend, get_week_number: date arithmetic

mod add_days;
mod arguments;
mod get_current_datetime;
mod get_iso8601_timestamp;
mod get_week_number;
mod is_weekend;

use std::str::FromStr;

use serde_json::Value;

use crate::calendar::Calendar;
use crate::error::{ToolError, ToolResult};
use crate::protocol::{McpTool, Tool};

pub use add_days::AddDaysTool;
pub use arguments::ToolArguments;
pub use get_current_datetime::GetCurrentDatetimeTool;
pub use get_iso8601_timestamp::GetIso8601TimestampTool;
pub use get_week_number::GetWeekNumberTool;
pub use is_weekend::IsWeekendTool;

/// Names of every tool the server exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetCurrentDatetime,
    GetIso8601Timestamp,
    AddDays,
    IsWeekend,
    GetWeekNumber,
}

impl ToolName {
    /// Catalog order used by tools/list
    pub const ALL: [ToolName; 5] = [
        ToolName::GetCurrentDatetime,
        ToolName::GetIso8601Timestamp,
        ToolName::AddDays,
        ToolName::IsWeekend,
        ToolName::GetWeekNumber,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::GetCurrentDatetime => "get_current_datetime",
            ToolName::GetIso8601Timestamp => "get_iso8601_timestamp",
            ToolName::AddDays => "add_days",
            ToolName::IsWeekend => "is_weekend",
            ToolName::GetWeekNumber => "get_week_number",
        }
    }

    pub fn handler(self) -> &'static dyn Tool {
        match self {
            ToolName::GetCurrentDatetime => &GetCurrentDatetimeTool,
            ToolName::GetIso8601Timestamp => &GetIso8601TimestampTool,
            ToolName::AddDays => &AddDaysTool,
            ToolName::IsWeekend => &IsWeekendTool,
            ToolName::GetWeekNumber => &GetWeekNumberTool,
        }
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }
}

/// Definitions of all tools, for tools/list
pub fn list_tools() -> Vec<McpTool> {
    ToolName::ALL
        .iter()
        .map(|tool| tool.handler().definition())
        .collect()
}

/// Run the named tool and return its raw (unwrapped) result
pub fn call_tool(calendar: &Calendar, name: &str, arguments: Option<Value>) -> ToolResult<Value> {
    let tool: ToolName = name.parse()?;
    let args = ToolArguments::from_value(arguments)?;
    tracing::debug!(tool = tool.as_str(), "calling tool");
    tool.handler().execute(calendar, &args)
}
