//! Current-time indicator.
//!
//! The indicator is never stored in a layout. Callers poll a `Clock` at a
//! fixed cadence and recompute it.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use super::grid::HourGrid;

/// Source of the current wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The date "go to today" jumps to.
pub fn today(clock: &dyn Clock) -> NaiveDate {
    clock.now().date()
}

/// Where to draw the "now" line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeIndicator {
    pub date: NaiveDate,
    pub hour: u32,
    /// Offset inside the hour row: `minute / 60 * 100`.
    pub top_percent: f64,
    pub computed_at: NaiveDateTime,
}

/// Indicator for the displayed `dates`, if one of them is today and the
/// current hour is a grid row.
pub fn current_time_indicator(
    dates: &[NaiveDate],
    grid: &HourGrid,
    clock: &dyn Clock,
) -> Option<TimeIndicator> {
    let now = clock.now();
    let today = now.date();

    if !dates.contains(&today) || !grid.contains(now.hour()) {
        return None;
    }

    Some(TimeIndicator {
        date: today,
        hour: now.hour(),
        top_percent: now.minute() as f64 / 60.0 * 100.0,
        computed_at: now,
    })
}

/// True once an indicator computed at `computed_at` is at least `cadence` old.
pub fn indicator_is_stale(
    computed_at: NaiveDateTime,
    now: NaiveDateTime,
    cadence: Duration,
) -> bool {
    now - computed_at >= cadence
}
