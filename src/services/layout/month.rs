//! Month grid helpers.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::models::event::Event;
use crate::utils::date::week_start;

/// Dates shown by a month view: trailing days of the previous month, every
/// day of the month, and leading days of the next month to finish the last
/// week. Always a whole number of weeks.
pub fn month_grid(date: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let first_of_month = date.with_day(1).unwrap_or(date);
    let grid_start = week_start(first_of_month, first_day_of_week);

    let days_in_month = days_in_month(first_of_month);
    let leading = (first_of_month - grid_start).num_days();
    let total_cells = ((leading + days_in_month) as f64 / 7.0).ceil() as i64 * 7;

    (0..total_cells)
        .map(|offset| grid_start + Duration::days(offset))
        .collect()
}

fn days_in_month(first_of_month: NaiveDate) -> i64 {
    let (year, month) = if first_of_month.month() == 12 {
        (first_of_month.year() + 1, 1)
    } else {
        (first_of_month.year(), first_of_month.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|next| (next - first_of_month).num_days())
        .unwrap_or(31)
}

/// Events grouped by the calendar date of their start, keeping input order
/// within a day.
pub fn events_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        grouped.entry(event.start.date()).or_default().push(event);
    }
    grouped
}
