//! Day and week layout composition.
//!
//! Columns are packed once per day, so an event keeps the same column in
//! every hour row it spans. Each row then reports the lanes it needs and the
//! geometry of every event visible in it.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use super::grid::HourGrid;
use super::packer::{max_concurrency, normalized_span, pack_columns};
use super::position::{event_position, is_visible_in_hour};
use crate::models::event::Event;
use crate::models::holiday::Holiday;
use crate::services::holiday::holidays_for_date;
use crate::utils::date::{hour_start, week_dates};

/// Geometry of one event inside one hour row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedEvent {
    pub event_id: String,
    pub column_index: usize,
    /// Columns used by the group of events this one transitively overlaps.
    /// Stable across every row the event spans.
    pub lane_count: usize,
    pub top_percent: f64,
    pub height_percent: f64,
    /// The row the block is drawn from. Other rows are continuations.
    pub is_anchor: bool,
}

/// One hour row of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    /// Lanes needed to draw this row: highest column index + 1. Columns are
    /// fixed for the whole day, so this can exceed `concurrent` when an
    /// event in a high column is the only one left in the row.
    pub columns: usize,
    /// Most events overlapping at a single instant within this hour. This is
    /// the minimal column count for the row taken on its own.
    pub concurrent: usize,
    pub events: Vec<PlacedEvent>,
}

impl HourBucket {
    fn empty(hour: u32) -> Self {
        Self {
            hour,
            columns: 0,
            concurrent: 0,
            events: Vec::new(),
        }
    }

    pub fn get(&self, event_id: &str) -> Option<&PlacedEvent> {
        self.events.iter().find(|placed| placed.event_id == event_id)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Renderable layout for a single date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub grid: HourGrid,
    /// Columns used across the whole day.
    pub columns: usize,
    /// One bucket per grid hour, in ascending order.
    pub hours: Vec<HourBucket>,
    /// All-day event ids in display order.
    pub all_day: Vec<String>,
    pub holidays: Vec<Holiday>,
    /// Timed events whose end is not after their start; laid out as zero length.
    pub malformed: Vec<String>,
    /// Timed events that fall entirely outside the grid hours.
    pub outside_grid: Vec<String>,
}

impl DayLayout {
    pub fn bucket(&self, hour: u32) -> Option<&HourBucket> {
        self.hours.iter().find(|bucket| bucket.hour == hour)
    }

    /// Number of distinct timed events placed on the grid.
    pub fn placed_event_count(&self) -> usize {
        self.hours
            .iter()
            .flat_map(|bucket| bucket.events.iter())
            .filter(|placed| placed.is_anchor)
            .count()
    }
}

/// Seven consecutive day layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout {
    pub start: NaiveDate,
    pub days: Vec<DayLayout>,
}

impl WeekLayout {
    pub fn day(&self, date: NaiveDate) -> Option<&DayLayout> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// Whether `event` belongs in the row for `hour`.
///
/// Continuation rows need the event to still be running after the row
/// starts, so an event ending exactly on the hour stays out of that row.
fn occupies_hour(event: &Event, date: NaiveDate, hour: u32) -> bool {
    if !is_visible_in_hour(event, hour) {
        return false;
    }
    hour == event.start.hour() || event.end > hour_start(date, hour)
}

fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_minutes().max(0) as f64
}

struct TimedEntry<'a> {
    event: &'a Event,
    column: usize,
    lane_count: usize,
    anchor_hour: Option<u32>,
}

/// Compose the layout for one date.
///
/// Only events whose start falls on `date` are considered.
pub fn compose_day(
    events: &[Event],
    date: NaiveDate,
    grid: &HourGrid,
    holidays: &[Holiday],
) -> DayLayout {
    let mut day_events: Vec<&Event> = events
        .iter()
        .filter(|event| event.start.date() == date)
        .collect();
    day_events.sort_by_key(|event| event.start);

    let (all_day, timed): (Vec<&Event>, Vec<&Event>) =
        day_events.into_iter().partition(|event| event.is_all_day());

    let malformed: Vec<String> = timed
        .iter()
        .filter_map(|event| event.check_span().err().map(|err| (event, err)))
        .map(|(event, err)| {
            log::warn!("{}; laying out as zero length", err);
            event.id.clone()
        })
        .collect();

    let assignment = pack_columns(timed.iter().copied());
    let mut entries: Vec<TimedEntry> = timed
        .iter()
        .enumerate()
        .map(|(index, &event)| TimedEntry {
            event,
            column: assignment.column_at(index).unwrap_or(0),
            lane_count: 1,
            anchor_hour: grid.hours().find(|hour| occupies_hour(event, date, *hour)),
        })
        .collect();
    assign_lane_counts(&mut entries);

    let outside_grid: Vec<String> = entries
        .iter()
        .filter(|entry| entry.anchor_hour.is_none())
        .map(|entry| entry.event.id.clone())
        .collect();

    let hours: Vec<HourBucket> = grid
        .hours()
        .map(|hour| compose_bucket(&entries, date, hour, grid))
        .collect();

    log::debug!(
        "Composed layout for {}: {} timed, {} all-day, {} columns",
        date,
        entries.len(),
        all_day.len(),
        assignment.column_count()
    );

    DayLayout {
        date,
        grid: *grid,
        columns: assignment.column_count(),
        hours,
        all_day: all_day.iter().map(|event| event.id.clone()).collect(),
        holidays: holidays_for_date(holidays, date),
        malformed,
        outside_grid,
    }
}

/// Group transitively overlapping events and record each group's width.
fn assign_lane_counts(entries: &mut [TimedEntry]) {
    let mut group_start = 0;
    let mut group_end: Option<NaiveDateTime> = None;

    for index in 0..=entries.len() {
        let closes_group = match (entries.get(index), group_end) {
            (Some(entry), Some(end)) => normalized_span(entry.event).0 >= end,
            (None, Some(_)) => true,
            _ => false,
        };

        if closes_group {
            let lanes = entries[group_start..index]
                .iter()
                .map(|entry| entry.column + 1)
                .max()
                .unwrap_or(1);
            for entry in &mut entries[group_start..index] {
                entry.lane_count = lanes;
            }
            group_start = index;
            group_end = None;
        }

        if let Some(entry) = entries.get(index) {
            let (_, end) = normalized_span(entry.event);
            group_end = Some(group_end.map_or(end, |current| current.max(end)));
        }
    }
}

fn compose_bucket(
    entries: &[TimedEntry],
    date: NaiveDate,
    hour: u32,
    grid: &HourGrid,
) -> HourBucket {
    let row_start = hour_start(date, hour);
    let row_end = hour_start(date, hour + 1);
    let grid_end = hour_start(date, grid.end_hour + 1);

    let mut bucket = HourBucket::empty(hour);
    let mut spans = Vec::new();

    for entry in entries {
        let Some(anchor_hour) = entry.anchor_hour else {
            continue;
        };
        if !occupies_hour(entry.event, date, hour) {
            continue;
        }

        let (start, end) = normalized_span(entry.event);
        spans.push((start.max(row_start), end.min(row_end).max(start.max(row_start))));

        let is_anchor = hour == anchor_hour;
        let (top_percent, height_percent) = if is_anchor {
            let (top, height) = if anchor_hour == entry.event.start.hour() {
                let position = event_position(entry.event);
                (position.top_percent, position.height_percent)
            } else {
                // Started above the grid: draw from the top of the first row.
                (0.0, minutes_between(row_start, end) / 60.0 * 100.0)
            };
            let room = (grid.end_hour + 1 - anchor_hour) as f64 * 100.0 - top;
            (top, height.min(room))
        } else {
            let remaining = minutes_between(row_start, end.min(grid_end));
            (0.0, (remaining / 60.0 * 100.0).min(100.0))
        };

        bucket.events.push(PlacedEvent {
            event_id: entry.event.id.clone(),
            column_index: entry.column,
            lane_count: entry.lane_count,
            top_percent,
            height_percent,
            is_anchor,
        });
    }

    bucket.columns = bucket
        .events
        .iter()
        .map(|placed| placed.column_index + 1)
        .max()
        .unwrap_or(0);
    bucket.concurrent = max_concurrency(spans);
    bucket
}

/// Compose layouts for an explicit list of dates.
pub fn compose_range(
    events: &[Event],
    dates: &[NaiveDate],
    grid: &HourGrid,
    holidays: &[Holiday],
) -> Vec<DayLayout> {
    dates
        .iter()
        .map(|date| compose_day(events, *date, grid, holidays))
        .collect()
}

/// Compose the week containing `anchor`, starting on `first_day_of_week`
/// (0 = Sunday).
pub fn compose_week(
    events: &[Event],
    anchor: NaiveDate,
    first_day_of_week: u8,
    grid: &HourGrid,
    holidays: &[Holiday],
) -> WeekLayout {
    let dates = week_dates(anchor, first_day_of_week);
    WeekLayout {
        start: dates[0],
        days: compose_range(events, &dates, grid, holidays),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::holiday::HolidayRegion;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        date().and_hms_opt(h, m, 0).unwrap()
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: None,
            start,
            end,
            category: Default::default(),
        }
    }

    #[test]
    fn test_empty_day_has_every_row_with_zero_columns() {
        let layout = compose_day(&[], date(), &HourGrid::default(), &[]);
        assert_eq!(layout.hours.len(), 16);
        assert!(layout.hours.iter().all(|b| b.columns == 0 && b.is_empty()));
        assert_eq!(layout.columns, 0);
    }

    #[test]
    fn test_overlapping_morning() {
        let events = vec![
            event("1", at(9, 0), at(10, 0)),
            event("2", at(9, 30), at(10, 30)),
            event("3", at(11, 0), at(11, 30)),
        ];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);

        let nine = layout.bucket(9).unwrap();
        assert_eq!(nine.columns, 2);
        assert_eq!(nine.concurrent, 2);
        assert_eq!(nine.get("1").unwrap().column_index, 0);
        assert_eq!(nine.get("2").unwrap().column_index, 1);
        assert_eq!(nine.get("2").unwrap().top_percent, 50.0);

        let ten = layout.bucket(10).unwrap();
        assert!(ten.get("1").is_none());
        assert_eq!(ten.columns, 2);
        assert_eq!(ten.concurrent, 1);
        let continuing = ten.get("2").unwrap();
        assert_eq!(continuing.column_index, 1);
        assert!(!continuing.is_anchor);
        assert_eq!(continuing.height_percent, 50.0);

        let eleven = layout.bucket(11).unwrap();
        assert_eq!(eleven.columns, 1);
        assert_eq!(eleven.get("3").unwrap().column_index, 0);
        assert_eq!(eleven.get("3").unwrap().lane_count, 1);
    }

    #[test]
    fn test_column_is_stable_across_rows() {
        let events = vec![
            event("long", at(9, 0), at(12, 0)),
            event("a", at(9, 0), at(9, 30)),
            event("b", at(10, 0), at(10, 30)),
        ];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);

        for hour in 9..=11 {
            let bucket = layout.bucket(hour).unwrap();
            assert_eq!(bucket.get("long").unwrap().column_index, 0);
            assert_eq!(bucket.get("long").unwrap().lane_count, 2);
        }
        assert_eq!(layout.bucket(10).unwrap().get("b").unwrap().column_index, 1);
    }

    #[test]
    fn test_repeated_ids_get_distinct_columns() {
        let events = vec![event("x", at(9, 0), at(10, 0)), event("x", at(9, 0), at(10, 0))];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);

        let nine = layout.bucket(9).unwrap();
        let columns: Vec<usize> = nine.events.iter().map(|placed| placed.column_index).collect();
        assert_eq!(columns, vec![0, 1]);
        assert_eq!(nine.columns, 2);
        assert!(nine.events.iter().all(|placed| placed.lane_count == 2));
    }

    #[test]
    fn test_all_day_events_are_separated() {
        let events = vec![
            event("holiday", at(0, 0), at(23, 59)),
            event("meeting", at(9, 0), at(10, 0)),
        ];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);
        assert_eq!(layout.all_day, vec!["holiday".to_string()]);
        assert_eq!(layout.placed_event_count(), 1);
    }

    #[test]
    fn test_other_days_are_ignored() {
        let tomorrow = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let events = vec![event(
            "later",
            tomorrow.and_hms_opt(9, 0, 0).unwrap(),
            tomorrow.and_hms_opt(10, 0, 0).unwrap(),
        )];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);
        assert_eq!(layout.placed_event_count(), 0);
    }

    #[test]
    fn test_event_starting_before_grid_anchors_at_first_row() {
        let events = vec![event("early", at(6, 0), at(8, 30))];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);

        let seven = layout.bucket(7).unwrap().get("early").unwrap();
        assert!(seven.is_anchor);
        assert_eq!(seven.top_percent, 0.0);
        assert_eq!(seven.height_percent, 150.0);
        assert!(!layout.bucket(8).unwrap().get("early").unwrap().is_anchor);
    }

    #[test]
    fn test_height_clamped_to_grid_bottom() {
        let events = vec![event("late", at(21, 30), at(23, 30))];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);
        let placed = layout.bucket(21).unwrap().get("late").unwrap();
        // Rows 21 and 22 remain; the block starts half way down row 21.
        assert_eq!(placed.height_percent, 150.0);
    }

    #[test]
    fn test_events_outside_grid_are_reported() {
        let events = vec![event("dawn", at(5, 0), at(6, 0))];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);
        assert_eq!(layout.outside_grid, vec!["dawn".to_string()]);
        assert_eq!(layout.placed_event_count(), 0);
    }

    #[test]
    fn test_malformed_event_is_flagged_not_dropped() {
        let events = vec![event("broken", at(9, 0), at(8, 0))];
        let layout = compose_day(&events, date(), &HourGrid::default(), &[]);
        assert_eq!(layout.malformed, vec!["broken".to_string()]);

        let placed = layout.bucket(9).unwrap().get("broken").unwrap();
        assert_eq!(placed.height_percent, 0.0);
        assert_eq!(layout.bucket(9).unwrap().concurrent, 1);
    }

    #[test]
    fn test_holidays_are_attached() {
        let holidays = vec![
            Holiday::new("h1", "New Year", date(), HolidayRegion::Global),
            Holiday::new(
                "h2",
                "Republic Day",
                NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
                HolidayRegion::Kerala,
            ),
        ];
        let layout = compose_day(&[], date(), &HourGrid::default(), &holidays);
        assert_eq!(layout.holidays.len(), 1);
        assert_eq!(layout.holidays[0].name, "New Year");
    }

    #[test]
    fn test_compose_week_monday_start() {
        let events = vec![event("1", at(9, 0), at(10, 0))];
        let week = compose_week(&events, date(), 1, &HourGrid::default(), &[]);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.start, date());
        assert_eq!(week.day(date()).unwrap().placed_event_count(), 1);
    }
}
