//! Data types for the DateTime MCP Server
//!
//! This module contains the result structures produced by the calendar tools.

mod calendar;

pub use calendar::{CurrentDateTime, DayShift, WeekNumber, WeekendCheck};

/// Result type for MCP server operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
