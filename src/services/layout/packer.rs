//! Greedy column packing for overlapping events.
//!
//! Events are sorted by start (stable, so input order breaks ties) and placed
//! into the first column whose last event ends at or before the new event's
//! start. On interval inputs this yields the minimum possible column count.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::event::Event;

/// Column index per event plus the total column count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnAssignment {
    columns: usize,
    /// (event id, column) in placement order
    placements: Vec<(String, usize)>,
    /// Column per input position
    #[serde(skip)]
    by_input: Vec<usize>,
    /// First placement per id
    #[serde(skip)]
    by_id: HashMap<String, usize>,
}

impl ColumnAssignment {
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Column of the first event packed with this id. Use `column_at` when
    /// ids may repeat.
    pub fn column_of(&self, event_id: &str) -> Option<usize> {
        self.by_id.get(event_id).copied()
    }

    /// Column of the event at `index` in the input sequence.
    pub fn column_at(&self, index: usize) -> Option<usize> {
        self.by_input.get(index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Placements in the order events were packed (ascending start).
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.placements
            .iter()
            .map(|(id, column)| (id.as_str(), *column))
    }
}

/// Effective span used for packing. Corrupt events (end before start)
/// collapse to zero length at their start.
pub(crate) fn normalized_span(event: &Event) -> (NaiveDateTime, NaiveDateTime) {
    (event.start, event.end.max(event.start))
}

/// Assign each event to the leftmost free column.
///
/// An event may reuse a column iff the end of that column's last event is
/// less than or equal to the new event's start.
pub fn pack_columns<'a, I>(events: I) -> ColumnAssignment
where
    I: IntoIterator<Item = &'a Event>,
{
    let events: Vec<&Event> = events.into_iter().collect();
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&index| events[index].start);

    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut assignment = ColumnAssignment {
        by_input: vec![0; events.len()],
        ..ColumnAssignment::default()
    };

    for index in order {
        let event = events[index];
        let (start, end) = normalized_span(event);

        let column = match column_ends.iter().position(|last_end| *last_end <= start) {
            Some(free) => {
                column_ends[free] = end;
                free
            }
            None => {
                column_ends.push(end);
                column_ends.len() - 1
            }
        };

        assignment.placements.push((event.id.clone(), column));
        assignment.by_input[index] = column;
        if assignment.by_id.contains_key(&event.id) {
            log::warn!("Duplicate event id '{}' in layout input", event.id);
        } else {
            assignment.by_id.insert(event.id.clone(), column);
        }
    }

    assignment.columns = column_ends.len();
    assignment
}

/// Largest number of spans active at one instant.
///
/// Spans are half-open, so one ending exactly when another starts does not
/// count as concurrent. Zero-length spans occupy no time, but a non-empty
/// input of only zero-length spans still reports one.
pub fn max_concurrency<I>(spans: I) -> usize
where
    I: IntoIterator<Item = (NaiveDateTime, NaiveDateTime)>,
{
    let mut boundaries: Vec<(NaiveDateTime, i32)> = Vec::new();
    let mut any = false;

    for (start, end) in spans {
        any = true;
        if end > start {
            boundaries.push((start, 1));
            boundaries.push((end, -1));
        }
    }

    // Ends (-1) sort before starts (+1) at the same instant.
    boundaries.sort();

    let mut active = 0i32;
    let mut peak = 0i32;
    for (_, delta) in boundaries {
        active += delta;
        peak = peak.max(active);
    }

    match (peak, any) {
        (0, true) => 1,
        _ => peak as usize,
    }
}
