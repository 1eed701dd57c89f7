//! Time-span queries on events.
//!
//! Spans are half-open: `[start, end)`. Back-to-back events do not overlap.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use super::Event;
use crate::utils::date::hour_start;

impl Event {
    /// True iff the event starts at midnight and either ends at 23:59 or
    /// ends on a later calendar date.
    pub fn is_all_day(&self) -> bool {
        let starts_at_midnight = self.start.hour() == 0 && self.start.minute() == 0;
        let ends_at_last_minute = self.end.hour() == 23 && self.end.minute() == 59;
        let rolls_over = self.end.date() > self.start.date();

        starts_at_midnight && (ends_at_last_minute || rolls_over)
    }

    /// True iff `self.start < other.end && other.start < self.end`.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff the event intersects the window `[window_start, window_end)`.
    pub fn spans(&self, window_start: NaiveDateTime, window_end: NaiveDateTime) -> bool {
        self.start < window_end && window_start < self.end
    }

    /// True iff the event intersects the hour row `hour` on `date`.
    pub fn spans_hour(&self, date: NaiveDate, hour: u32) -> bool {
        self.spans(hour_start(date, hour), hour_start(date, hour + 1))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::event::Event;
    use chrono::{NaiveDate, NaiveDateTime};
    use test_case::test_case;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn raw(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            start,
            end,
            category: Default::default(),
        }
    }

    #[test_case(at(1, 0, 0), at(1, 23, 59), true ; "midnight to 23:59")]
    #[test_case(at(1, 0, 0), at(2, 0, 0), true ; "midnight to next midnight")]
    #[test_case(at(1, 0, 0), at(3, 12, 0), true ; "multi day from midnight")]
    #[test_case(at(1, 9, 0), at(1, 10, 0), false ; "timed morning event")]
    #[test_case(at(1, 0, 0), at(1, 12, 0), false ; "midnight to noon")]
    #[test_case(at(1, 0, 30), at(2, 0, 0), false ; "starts after midnight")]
    fn test_is_all_day(start: NaiveDateTime, end: NaiveDateTime, expected: bool) {
        assert_eq!(raw("e", start, end).is_all_day(), expected);
    }

    #[test]
    fn test_overlaps_partial() {
        let a = raw("a", at(1, 9, 0), at(1, 10, 0));
        let b = raw("b", at(1, 9, 30), at(1, 10, 30));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        let a = raw("a", at(1, 9, 0), at(1, 10, 0));
        let b = raw("b", at(1, 10, 0), at(1, 11, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_event_overlaps() {
        let outer = raw("outer", at(1, 8, 0), at(1, 12, 0));
        let inner = raw("inner", at(1, 9, 0), at(1, 9, 30));
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn test_spans_hour_half_open() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let event = raw("e", at(1, 9, 0), at(1, 11, 30));

        assert!(!event.spans_hour(date, 8));
        assert!(event.spans_hour(date, 9));
        assert!(event.spans_hour(date, 10));
        assert!(event.spans_hour(date, 11));
        assert!(!event.spans_hour(date, 12));
    }

    #[test]
    fn test_spans_hour_excludes_exact_end() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let event = raw("e", at(1, 9, 0), at(1, 10, 0));
        assert!(!event.spans_hour(date, 10));
    }
}
