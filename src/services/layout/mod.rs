// Layout module
// Overlap packing, hour-row positions and day/week composition

pub mod cache;
pub mod clock;
pub mod composer;
pub mod engine;
pub mod grid;
pub mod month;
pub mod packer;
pub mod position;

pub use clock::{Clock, FixedClock, SystemClock, TimeIndicator};
pub use composer::{compose_day, compose_week, DayLayout, HourBucket, PlacedEvent, WeekLayout};
pub use engine::LayoutEngine;
pub use grid::HourGrid;
pub use packer::{pack_columns, ColumnAssignment};
pub use position::{event_position, is_visible_in_hour, EventPosition};
