//! Previous/next navigation between calendar pages.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::week_start;

/// The page size a calendar shows at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Week,
    #[default]
    Month,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(format!("Unknown calendar view: {}", other)),
        }
    }
}

/// Move `date` by `steps` pages of `view`. Negative steps go back.
///
/// Month steps keep the day of month, clamped to the length of the target
/// month (Jan 31 + 1 month is Feb 29 in a leap year). `None` when the result
/// is out of range.
pub fn shift(date: NaiveDate, view: CalendarView, steps: i32) -> Option<NaiveDate> {
    match view {
        CalendarView::Day => date.checked_add_signed(Duration::days(steps as i64)),
        CalendarView::Week => date.checked_add_signed(Duration::weeks(steps as i64)),
        CalendarView::Month => {
            let months = Months::new(steps.unsigned_abs());
            if steps >= 0 {
                date.checked_add_months(months)
            } else {
                date.checked_sub_months(months)
            }
        }
    }
}

/// First date of the page of `view` containing `date`.
pub fn view_start(date: NaiveDate, view: CalendarView, first_day_of_week: u8) -> NaiveDate {
    match view {
        CalendarView::Day => date,
        CalendarView::Week => week_start(date, first_day_of_week),
        CalendarView::Month => date.with_day(1).unwrap_or(date),
    }
}
