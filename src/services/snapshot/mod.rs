// Snapshot service
// Event list persisted as a JSON document under a namespaced key

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::event::Event;

/// Key the event list is stored under inside the snapshot document.
pub const EVENTS_KEY: &str = "calendar-app:events";

/// Reads and writes the event snapshot the layout engine consumes.
pub struct SnapshotService {
    path: PathBuf,
}

impl SnapshotService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all events. A missing file or missing key is an empty list;
    /// records that fail to parse are skipped.
    pub fn load(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            log::debug!("No snapshot at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read snapshot {:?}", self.path))?;
        parse_events(&contents).with_context(|| format!("Invalid snapshot {:?}", self.path))
    }

    /// Write all events, keeping any other keys already in the document.
    pub fn save(&self, events: &[Event]) -> Result<()> {
        let mut document = if self.path.exists() {
            let contents = fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read snapshot {:?}", self.path))?;
            match serde_json::from_str::<Value>(&contents) {
                Ok(Value::Object(map)) => map,
                _ => {
                    log::warn!("Replacing unreadable snapshot document {:?}", self.path);
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        let value = serde_json::to_value(events).context("Failed to serialize events")?;
        document.insert(EVENTS_KEY.to_string(), value);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create snapshot directory {:?}", parent))?;
            }
        }

        let json = serde_json::to_string_pretty(&Value::Object(document))
            .context("Failed to serialize snapshot")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write snapshot {:?}", self.path))?;

        log::info!("Saved {} events to {:?}", events.len(), self.path);
        Ok(())
    }
}

/// Parse the events out of a snapshot document.
///
/// Accepts either the namespaced object form or a bare array of events.
pub fn parse_events(contents: &str) -> Result<Vec<Event>> {
    let document: Value = serde_json::from_str(contents).context("Snapshot is not valid JSON")?;

    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove(EVENTS_KEY) {
            Some(Value::Array(records)) => records,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                anyhow::bail!("'{}' must be an array, found {}", EVENTS_KEY, kind(&other))
            }
        },
        other => anyhow::bail!("Snapshot must be an object or array, found {}", kind(&other)),
    };

    let mut events = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Event>(record) {
            Ok(event) => events.push(event),
            Err(e) => log::warn!("Skipping snapshot record {}: {}", index, e),
        }
    }

    Ok(events)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
