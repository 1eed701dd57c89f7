// Settings module
// Layout-related user settings, persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::holiday::HolidayRegion;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    /// First hour row of the time grid (inclusive)
    pub grid_start_hour: u32,
    /// Last hour row of the time grid (inclusive)
    pub grid_end_hour: u32,
    pub holiday_regions: Vec<HolidayRegion>,
    /// Refresh cadence of the current-time indicator, in seconds
    pub clock_refresh_secs: u64,
    /// Shortest duration a resize may produce, in minutes
    pub min_resize_minutes: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            grid_start_hour: 7,
            grid_end_hour: 22,
            holiday_regions: vec![HolidayRegion::All],
            clock_refresh_secs: 60,
            min_resize_minutes: 15,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            ));
        }

        if self.grid_end_hour > 23 {
            return Err(format!("grid_end_hour must be 0-23, got {}", self.grid_end_hour));
        }

        if self.grid_start_hour > self.grid_end_hour {
            return Err(format!(
                "grid_start_hour ({}) must not be after grid_end_hour ({})",
                self.grid_start_hour, self.grid_end_hour
            ));
        }

        if self.clock_refresh_secs == 0 {
            return Err("clock_refresh_secs must be at least 1".to_string());
        }

        if self.min_resize_minutes < 1 {
            return Err("min_resize_minutes must be at least 1".to_string());
        }

        Ok(())
    }
}
