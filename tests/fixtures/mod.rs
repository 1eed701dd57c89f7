// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

#![allow(dead_code)]

use calendar_layout::models::category::EventCategory;
use calendar_layout::models::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Jan 1, 2024 (New Year's Day in the built-in holiday table)
    pub fn new_year_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Wednesday, Mar 13, 2024 (no built-in holiday)
    pub fn plain_wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
    }

    /// Thursday, Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Wall-clock time on `date`
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Timed event with the given id and times
    pub fn timed(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: None,
            start,
            end,
            category: EventCategory::Work,
        }
    }

    /// All-day event covering `date`
    pub fn all_day(id: &str, date: NaiveDate) -> Event {
        Event {
            id: id.to_string(),
            title: format!("All day {}", id),
            description: None,
            start: dates::at(date, 0, 0),
            end: dates::at(date, 23, 59),
            category: EventCategory::Personal,
        }
    }

    /// 1: 09:00-10:00, 2: 09:30-10:30, 3: 11:00-11:30 on `date`
    pub fn overlapping_morning(date: NaiveDate) -> Vec<Event> {
        vec![
            timed("1", dates::at(date, 9, 0), dates::at(date, 10, 0)),
            timed("2", dates::at(date, 9, 30), dates::at(date, 10, 30)),
            timed("3", dates::at(date, 11, 0), dates::at(date, 11, 30)),
        ]
    }

    /// A: 09:00-10:00, B: 09:30-10:30, C: 10:15-10:45 on `date`
    pub fn chained_overlaps(date: NaiveDate) -> Vec<Event> {
        vec![
            timed("A", dates::at(date, 9, 0), dates::at(date, 10, 0)),
            timed("B", dates::at(date, 9, 30), dates::at(date, 10, 30)),
            timed("C", dates::at(date, 10, 15), dates::at(date, 10, 45)),
        ]
    }
}
