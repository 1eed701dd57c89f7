// Event module
// Calendar event record consumed by the layout engine

mod span;

use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::LayoutError;
use crate::models::category::EventCategory;
use crate::utils::date::wall_clock;

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Calendar event as stored by the event store.
///
/// Timestamps are local wall-clock values. Layout code treats events as
/// immutable inputs; a move produces a new `Event` with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "wall_clock")]
    pub start: NaiveDateTime,
    #[serde(with = "wall_clock")]
    pub end: NaiveDateTime,
    #[serde(default, alias = "type")]
    pub category: EventCategory,
}

impl Event {
    /// Create a new timed event with a generated id
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Examples
    /// ```
    /// use calendar_layout::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("Team Meeting", start, end).unwrap();
    /// assert!(!event.id.is_empty());
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        Self::builder().title(title).start(start).end(end).build()
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Generate a fresh, process-unique event id.
    pub fn generate_id() -> String {
        let sequence = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!(
            "evt-{}-{}",
            Local::now().timestamp_millis(),
            sequence
        )
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end <= self.start && !self.is_all_day() {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Get the duration of the event (may be negative for corrupt records)
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when a timed event's end does not come after its start.
    pub fn is_malformed(&self) -> bool {
        self.end <= self.start && !self.is_all_day()
    }

    /// `MalformedEvent` for events the layout has to treat as zero length.
    pub fn check_span(&self) -> Result<(), LayoutError> {
        if self.is_malformed() {
            return Err(LayoutError::MalformedEvent {
                id: self.id.clone(),
                reason: format!("end {} is not after start {}", self.end, self.start),
            });
        }
        Ok(())
    }

    /// Copy of this event with a new time range, keeping id and payload.
    pub fn with_times(&self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    category: EventCategory,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing id instead of generating one
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id: self.id.unwrap_or_else(Event::generate_id),
            title,
            description: self.description,
            start,
            end,
            category: self.category,
        };

        event.validate()?;
        Ok(event)
    }
}
