//! Event category model.
//!
//! Categories only drive styling (color, label). They never change how an
//! event is laid out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Work,
    Personal,
    Meeting,
    Reminder,
    #[default]
    Other,
}

impl EventCategory {
    /// All categories in display order.
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Work,
        EventCategory::Personal,
        EventCategory::Meeting,
        EventCategory::Reminder,
        EventCategory::Other,
    ];

    /// Lowercase name used in persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Meeting => "meeting",
            Self::Reminder => "reminder",
            Self::Other => "other",
        }
    }

    /// Capitalised label for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Meeting => "Meeting",
            Self::Reminder => "Reminder",
            Self::Other => "Other",
        }
    }

    /// Default hex color for blocks of this category.
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Work => "#3B82F6",
            Self::Personal => "#10B981",
            Self::Meeting => "#8B5CF6",
            Self::Reminder => "#F59E0B",
            Self::Other => "#6B7280",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category name is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown event category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for EventCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
