// Date utility functions
// Wall-clock helpers shared by the layout services. Everything here works on
// naive local date/times; no timezone conversion happens past parsing.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

mod navigation;

pub use navigation::{shift, view_start, CalendarView};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable second of the day (23:59:59).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::seconds(86_399)
}

/// Wall-clock start of `hour` on `date`. Hours past 23 roll into the next day.
pub fn hour_start(date: NaiveDate, hour: u32) -> NaiveDateTime {
    start_of_day(date) + Duration::hours(hour as i64)
}

/// Minutes elapsed since midnight of the timestamp's own date.
pub fn minutes_since_midnight(time: NaiveDateTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// The seven contiguous dates of the week containing `date`.
pub fn week_dates(date: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let start = week_start(date, first_day_of_week);
    (0..7).map(|offset| start + Duration::days(offset)).collect()
}

/// Parse a persisted timestamp into local wall-clock time.
///
/// Accepts naive ISO-8601 (`2024-01-01T09:00:00`, optional fraction, or
/// minute precision) and RFC 3339 strings with an offset, which are shifted
/// into the local timezone.
pub fn parse_wall_clock(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .map_err(|e| format!("Invalid timestamp '{}': {}", value, e))
}

/// Format a wall-clock timestamp the way it is persisted.
pub fn format_wall_clock(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Serde adapter for wall-clock timestamps, used with `#[serde(with = ...)]`.
pub mod wall_clock {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_wall_clock(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_wall_clock(&raw).map_err(de::Error::custom)
    }
}
