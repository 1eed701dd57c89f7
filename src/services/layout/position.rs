//! Vertical placement of an event inside hour rows.
//!
//! Percentages are relative to one hour row: `top_percent` is the offset of
//! the start minute, `height_percent` is the duration where 100 equals one
//! hour. Multi-hour events keep heights above 100 and overflow downwards;
//! callers clamp against the grid.

use chrono::Timelike;
use serde::Serialize;

use crate::models::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventPosition {
    pub top_percent: f64,
    pub height_percent: f64,
}

/// Hour index of the event's end, counted from midnight of its start date.
/// An end on a later date adds 24 per day. Corrupt events end in their start hour.
pub fn end_hour(event: &Event) -> u32 {
    if event.end <= event.start {
        return event.start.hour();
    }
    let days = (event.end.date() - event.start.date()).num_days().max(0) as u32;
    days * 24 + event.end.hour()
}

/// `(end.hour - start.hour) * 60 + (end.minute - start.minute)`, extended
/// across date boundaries. Zero when the end is not after the start.
pub fn duration_minutes(event: &Event) -> i64 {
    if event.end <= event.start {
        return 0;
    }
    let days = (event.end.date() - event.start.date()).num_days();
    let end_minutes = days * 24 * 60 + event.end.hour() as i64 * 60 + event.end.minute() as i64;
    let start_minutes = event.start.hour() as i64 * 60 + event.start.minute() as i64;
    (end_minutes - start_minutes).max(0)
}

/// True when the event's end hour is after its start hour.
pub fn spans_multiple_hours(event: &Event) -> bool {
    end_hour(event) > event.start.hour()
}

/// `start.hour == hour`, or a multi-hour event with `start.hour < hour <= end.hour`.
///
/// The end hour is inclusive, so an event ending exactly on the hour reports
/// itself visible in that final row. The composer additionally requires the
/// event to occupy time in a continuation row.
pub fn is_visible_in_hour(event: &Event, hour: u32) -> bool {
    let start_hour = event.start.hour();
    start_hour == hour
        || (spans_multiple_hours(event) && hour > start_hour && hour <= end_hour(event))
}

pub fn top_percent(event: &Event) -> f64 {
    event.start.minute() as f64 / 60.0 * 100.0
}

/// Height for an event drawn in its start row.
///
/// Events that finish inside their start hour are clamped to 100; longer
/// events exceed 100. Degenerate events report 0 and the UI decides on a
/// minimum visible height.
pub fn height_percent(event: &Event) -> f64 {
    let height = duration_minutes(event) as f64 / 60.0 * 100.0;
    if spans_multiple_hours(event) {
        height
    } else {
        height.min(100.0)
    }
}

pub fn event_position(event: &Event) -> EventPosition {
    EventPosition {
        top_percent: top_percent(event),
        height_percent: height_percent(event),
    }
}
