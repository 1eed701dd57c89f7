// Move/Resize resolver
//
// Turns a completed drag gesture into a proposed event value.
// - Day drops keep the time of day and change only the date
// - Slot drops place the start exactly on the slot
// - Resizes move one edge and respect a minimum duration
//
// Nothing here mutates the source event or touches storage.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

use crate::error::{LayoutError, Result};
use crate::models::event::Event;
use crate::utils::date::parse_wall_clock;

/// Where an event was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Month cell or day header: date only.
    Day(NaiveDate),
    /// Time slot in a day/week grid.
    Slot(NaiveDateTime),
}

impl FromStr for DropTarget {
    type Err = LayoutError;

    /// `YYYY-MM-DD` for a day drop, an ISO-8601 date-time for a slot drop.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LayoutError::InvalidDropTarget("empty drop target".to_string()));
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(DropTarget::Day(date));
        }

        parse_wall_clock(trimmed)
            .map(DropTarget::Slot)
            .map_err(LayoutError::InvalidDropTarget)
    }
}

/// The single message a UI sends when a drag ends on a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropMessage {
    pub source_id: String,
    pub target: DropTarget,
}

impl DropMessage {
    pub fn new(source_id: impl Into<String>, target: DropTarget) -> Self {
        Self {
            source_id: source_id.into(),
            target,
        }
    }

    /// Build a message from raw UI values.
    pub fn parse(source_id: &str, target: &str) -> Result<Self> {
        if source_id.trim().is_empty() {
            return Err(LayoutError::InvalidDropTarget("missing source event".to_string()));
        }
        Ok(Self::new(source_id, target.parse()?))
    }
}

/// Which edge of the event a resize moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Top handle: adjusts the start
    Start,
    /// Bottom handle: adjusts the end
    End,
}

fn shifted(event: &Event, new_start: NaiveDateTime) -> Result<Event> {
    let duration = event.end - event.start;
    let new_end = new_start.checked_add_signed(duration).ok_or_else(|| {
        LayoutError::InvalidDropTarget(format!(
            "{} is out of range for event '{}'",
            new_start, event.id
        ))
    })?;
    Ok(event.with_times(new_start, new_end))
}

/// Propose the result of dropping `event` on `target`.
///
/// Returns `Ok(None)` when the drop changes nothing: a day drop onto the
/// event's own date, or a slot drop onto its current start. The returned
/// event keeps the id and exactly the original `end - start`.
pub fn propose_move(event: &Event, target: &DropTarget) -> Result<Option<Event>> {
    let new_start = match *target {
        DropTarget::Day(date) => {
            if date == event.start.date() {
                log::debug!("Event '{}' dropped on its own date, nothing to do", event.id);
                return Ok(None);
            }
            date.and_time(event.start.time())
        }
        DropTarget::Slot(start) => {
            if start == event.start {
                return Ok(None);
            }
            start
        }
    };

    let moved = shifted(event, new_start)?;
    log::debug!(
        "Proposed move of '{}' from {} to {}",
        event.id,
        event.start,
        moved.start
    );
    Ok(Some(moved))
}

/// Resolve a drop message against the current event snapshot.
pub fn resolve_drop(events: &[Event], message: &DropMessage) -> Result<Option<Event>> {
    let event = events
        .iter()
        .find(|event| event.id == message.source_id)
        .ok_or_else(|| {
            log::warn!("Drop for unknown event '{}' ignored", message.source_id);
            LayoutError::InvalidDropTarget(format!("no event with id '{}'", message.source_id))
        })?;

    propose_move(event, &message.target)
}

/// Propose the result of dragging one edge of `event` to `new_time`.
///
/// The edge not being dragged stays put. Results shorter than
/// `min_duration` are rejected.
pub fn propose_resize(
    event: &Event,
    edge: ResizeEdge,
    new_time: NaiveDateTime,
    min_duration: Duration,
) -> Result<Event> {
    let (start, end) = match edge {
        ResizeEdge::Start => (new_time, event.end),
        ResizeEdge::End => (event.start, new_time),
    };

    if end - start < min_duration {
        return Err(LayoutError::InvalidResize(format!(
            "event '{}' would last {} minutes, minimum is {}",
            event.id,
            (end - start).num_minutes(),
            min_duration.num_minutes()
        )));
    }

    Ok(event.with_times(start, end))
}

/// Snap a time to the start of its slot of `slot_minutes`.
pub fn snap_to_slot(time: NaiveDateTime, slot_minutes: u32) -> NaiveDateTime {
    if slot_minutes == 0 {
        return time;
    }
    let minutes = crate::utils::date::minutes_since_midnight(time) as u32;
    let snapped = minutes - minutes % slot_minutes;
    NaiveTime::from_hms_opt(snapped / 60, snapped % 60, 0)
        .map(|slot| time.date().and_time(slot))
        .unwrap_or(time)
}
