// Property-based tests for overlap packing and move resolution
// Random event sets on a single day, random drop dates

use calendar_layout::models::event::Event;
use calendar_layout::services::layout::packer::{max_concurrency, pack_columns};
use calendar_layout::services::moves::{propose_move, DropTarget};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
}

fn minute_of_day(minutes: i64) -> NaiveDateTime {
    day().and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(minutes)
}

/// Events with positive durations starting between 07:00 and 21:59. Ids
/// are drawn from a small pool so some repeat, as in corrupt snapshots.
fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((420i64..1320, 5i64..240, 0usize..8), 0..24).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(index, (start, length, id))| Event {
                id: format!("e{}", id),
                title: format!("Event {}", index),
                description: None,
                start: minute_of_day(start),
                end: minute_of_day(start + length),
                category: Default::default(),
            })
            .collect()
    })
}

proptest! {
    /// Property: the packer never uses more columns than the largest set of
    /// events overlapping at one instant, and never fewer
    #[test]
    fn prop_column_count_equals_max_overlap(events in events_strategy()) {
        let assignment = pack_columns(&events);
        let concurrency = if events.is_empty() {
            0
        } else {
            max_concurrency(events.iter().map(|event| (event.start, event.end)))
        };
        prop_assert_eq!(assignment.column_count(), concurrency);
    }

    /// Property: two events sharing a column never overlap
    #[test]
    fn prop_no_overlap_within_column(events in events_strategy()) {
        let assignment = pack_columns(&events);

        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate().skip(i + 1) {
                if assignment.column_at(i) == assignment.column_at(j) {
                    prop_assert!(!a.overlaps(b), "{} and {} share a column", a.id, b.id);
                }
            }
        }
    }

    /// Property: every event receives a column below the column count
    #[test]
    fn prop_every_event_is_placed(events in events_strategy()) {
        let assignment = pack_columns(&events);
        prop_assert_eq!(assignment.len(), events.len());
        for index in 0..events.len() {
            let column = assignment.column_at(index);
            prop_assert!(column.is_some());
            prop_assert!(column.unwrap() < assignment.column_count());
        }
    }

    /// Property: packing the same input twice gives the same assignment
    #[test]
    fn prop_packing_is_deterministic(events in events_strategy()) {
        prop_assert_eq!(pack_columns(&events), pack_columns(&events));
    }

    /// Property: a day drop keeps the exact duration and time of day
    #[test]
    fn prop_day_drop_preserves_duration(
        start in 0i64..1440,
        length in 1i64..(3 * 1440),
        offset in -400i64..400,
    ) {
        prop_assume!(offset != 0);

        let event = Event {
            id: "moving".to_string(),
            title: "Moving".to_string(),
            description: None,
            start: minute_of_day(start),
            end: minute_of_day(start + length),
            category: Default::default(),
        };
        let target = event.start.date() + Duration::days(offset);

        let moved = propose_move(&event, &DropTarget::Day(target)).unwrap().unwrap();
        prop_assert_eq!(moved.end - moved.start, event.end - event.start);
        prop_assert_eq!(moved.start.time(), event.start.time());
        prop_assert_eq!(moved.start.date(), target);
        prop_assert_eq!(moved.id, event.id);
    }

    /// Property: dropping onto the event's own date never proposes an update
    #[test]
    fn prop_same_day_drop_is_noop(start in 0i64..1440, length in 1i64..600) {
        let event = Event {
            id: "still".to_string(),
            title: "Still".to_string(),
            description: None,
            start: minute_of_day(start),
            end: minute_of_day(start + length),
            category: Default::default(),
        };
        let target = DropTarget::Day(event.start.date());
        prop_assert_eq!(propose_move(&event, &target).unwrap(), None);
    }
}
