//! Hour grid bounds for day and week views.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::models::settings::Settings;

/// Inclusive range of hour rows shown by the time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HourGrid {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for HourGrid {
    /// 07:00 through 22:00, sixteen rows.
    fn default() -> Self {
        Self {
            start_hour: 7,
            end_hour: 22,
        }
    }
}

impl HourGrid {
    /// Build a grid, swapping the bounds if they arrive inverted.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        let start_hour = start_hour.min(23);
        let end_hour = end_hour.min(23);
        if start_hour <= end_hour {
            Self { start_hour, end_hour }
        } else {
            log::warn!(
                "Inverted hour grid {}..={}, swapping bounds",
                start_hour,
                end_hour
            );
            Self {
                start_hour: end_hour,
                end_hour: start_hour,
            }
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.grid_start_hour, settings.grid_end_hour)
    }

    pub fn hours(&self) -> RangeInclusive<u32> {
        self.start_hour..=self.end_hour
    }

    pub fn row_count(&self) -> usize {
        (self.end_hour - self.start_hour + 1) as usize
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.hours().contains(&hour)
    }
}
