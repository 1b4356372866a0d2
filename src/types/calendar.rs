//! Result types returned by the calendar tools

use serde::{Deserialize, Serialize};

/// Current date and time in a resolved timezone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDateTime {
    /// Full ISO-8601 timestamp including the UTC offset
    pub datetime: String,
    pub date: String,
    pub time: String,
    /// IANA identifier of the timezone actually used
    pub timezone: String,
    pub day_of_week: String,
    pub week_number: u32,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Outcome of shifting a date by a number of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayShift {
    pub original: String,
    pub result: String,
    pub days_added: i64,
    /// Weekday of `result`
    pub day_of_week: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendCheck {
    pub date: String,
    pub day_of_week: String,
    pub is_weekend: bool,
}

/// ISO-8601 week of a date. `year` is the week-based year, which differs
/// from the calendar year around New Year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekNumber {
    pub date: String,
    pub week_number: u32,
    pub year: i32,
}
