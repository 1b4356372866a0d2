//! Calendar utilities
//!
//! Pure date/time computations behind the MCP tools. Functions taking an
//! explicit instant or date are deterministic; [`Calendar`] reads the
//! system clock and supplies the defaults (timezone, today's date).
//!
//! Nothing in here fails on bad input: unknown timezones and unparsable
//! dates fall back to the defaults. The only error is date overflow.

mod timezone;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, SecondsFormat, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{ToolError, ToolResult};
use crate::types::{CurrentDateTime, DayShift, WeekNumber, WeekendCheck};

pub use timezone::{host_timezone, parse_timezone};

/// Date format accepted and produced by the tools
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock-reading entry point carrying the default timezone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calendar {
    default_tz: Tz,
}

impl Calendar {
    pub fn new(default_tz: Tz) -> Self {
        Self { default_tz }
    }

    pub fn default_timezone(&self) -> Tz {
        self.default_tz
    }

    /// Resolve a requested timezone, falling back to the default
    pub fn resolve_timezone(&self, name: Option<&str>) -> Tz {
        match name {
            Some(name) => parse_timezone(name).unwrap_or_else(|| {
                tracing::debug!(timezone = name, "unknown timezone, using default");
                self.default_tz
            }),
            None => self.default_tz,
        }
    }

    /// Today's date in the default timezone
    pub fn today(&self) -> NaiveDate {
        today_at(Utc::now(), self.default_tz)
    }

    /// Parse a date or timestamp string, falling back to today
    pub fn resolve_date(&self, input: Option<&str>) -> NaiveDate {
        match input {
            Some(text) => parse_date(text).unwrap_or_else(|| {
                tracing::debug!(date = text, "unparsable date, using today");
                self.today()
            }),
            None => self.today(),
        }
    }

    pub fn current_datetime(&self, timezone: Option<&str>) -> CurrentDateTime {
        current_datetime_at(Utc::now(), self.resolve_timezone(timezone))
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

/// Local date-time layouts accepted when no UTC offset is given
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a date, ignoring surrounding whitespace.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date as written, in the
/// timestamp's own offset) and offset-less ISO-8601 date-times.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|dt| dt.date())
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Full English weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Calendar date of `now` as observed in `tz`
pub fn today_at(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Describe `now` as seen in `tz`
pub fn current_datetime_at(now: DateTime<Utc>, tz: Tz) -> CurrentDateTime {
    let local = now.with_timezone(&tz);
    CurrentDateTime {
        datetime: local.to_rfc3339_opts(SecondsFormat::Secs, false),
        date: local.format(DATE_FORMAT).to_string(),
        time: local.format("%H:%M:%S").to_string(),
        timezone: tz.name().to_string(),
        day_of_week: weekday_name(local.weekday()).to_string(),
        week_number: local.iso_week().week(),
        year: local.year(),
        month: local.month(),
        day: local.day(),
    }
}

/// Current UTC time as ISO-8601 with a `Z` suffix
pub fn iso8601_timestamp() -> String {
    iso8601_timestamp_at(Utc::now())
}

pub fn iso8601_timestamp_at(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Shift `date` by `days` (negative moves backwards)
pub fn add_days(date: NaiveDate, days: i64) -> ToolResult<DayShift> {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    let shifted = shifted.ok_or_else(|| {
        ToolError::DateOutOfRange(format!("{} {:+} days", format_date(date), days))
    })?;

    Ok(DayShift {
        original: format_date(date),
        result: format_date(shifted),
        days_added: days,
        day_of_week: weekday_name(shifted.weekday()).to_string(),
    })
}

pub fn is_weekend(date: NaiveDate) -> WeekendCheck {
    let weekday = date.weekday();
    WeekendCheck {
        date: format_date(date),
        day_of_week: weekday_name(weekday).to_string(),
        is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
    }
}

/// ISO-8601 week: Monday-start, week 1 holds the year's first Thursday
pub fn week_number(date: NaiveDate) -> WeekNumber {
    let week = date.iso_week();
    WeekNumber {
        date: format_date(date),
        week_number: week.week(),
        year: week.year(),
    }
}
