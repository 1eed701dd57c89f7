//! Holiday markers shown as non-interactive day decorations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Region a holiday belongs to. `All` is only meaningful as a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HolidayRegion {
    Kerala,
    #[serde(rename = "UAE")]
    Uae,
    Global,
    All,
}

impl HolidayRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kerala => "Kerala",
            Self::Uae => "UAE",
            Self::Global => "Global",
            Self::All => "All",
        }
    }

    /// Whether a selection containing this value includes `region`.
    pub fn selects(&self, region: HolidayRegion) -> bool {
        *self == HolidayRegion::All || *self == region
    }
}

impl fmt::Display for HolidayRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HolidayRegion {
    type Err = HolidayValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kerala" => Ok(Self::Kerala),
            "uae" => Ok(Self::Uae),
            "global" => Ok(Self::Global),
            "all" => Ok(Self::All),
            _ => Err(HolidayValidationError::UnknownRegion(s.to_string())),
        }
    }
}

/// A single-day holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub region: HolidayRegion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Holiday {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDate,
        region: HolidayRegion,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            region,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn validate(&self) -> Result<(), HolidayValidationError> {
        if self.name.trim().is_empty() {
            return Err(HolidayValidationError::EmptyName);
        }
        if self.region == HolidayRegion::All {
            return Err(HolidayValidationError::AmbiguousRegion);
        }
        Ok(())
    }
}

/// Validation errors for Holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayValidationError {
    EmptyName,
    AmbiguousRegion,
    UnknownRegion(String),
}

impl fmt::Display for HolidayValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Holiday name cannot be empty"),
            Self::AmbiguousRegion => write!(f, "A holiday must belong to a concrete region"),
            Self::UnknownRegion(name) => write!(f, "Unknown holiday region: {}", name),
        }
    }
}

impl std::error::Error for HolidayValidationError {}
