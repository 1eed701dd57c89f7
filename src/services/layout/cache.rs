//! Memoized layouts.
//!
//! A layout is recomputed only when its inputs change. Inputs are reduced to
//! a content hash of (events, dates, grid, holidays); the cache keeps the
//! most recent entry.

use chrono::NaiveDate;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::grid::HourGrid;
use crate::models::event::Event;
use crate::models::holiday::Holiday;

/// Content hash of everything a layout depends on.
pub fn layout_key(
    events: &[Event],
    dates: &[NaiveDate],
    grid: &HourGrid,
    holidays: &[Holiday],
) -> u64 {
    let mut hasher = DefaultHasher::new();
    events.hash(&mut hasher);
    dates.hash(&mut hasher);
    grid.hash(&mut hasher);
    holidays.hash(&mut hasher);
    hasher.finish()
}

/// Single-entry memo keyed by `layout_key`.
#[derive(Debug)]
pub struct LayoutCache<T> {
    entry: Option<(u64, T)>,
    hits: u64,
    misses: u64,
}

impl<T> Default for LayoutCache<T> {
    fn default() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<T> LayoutCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&mut self, key: u64, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if self.entry.as_ref().map(|(cached, _)| *cached) == Some(key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            log::debug!("Layout cache miss for key {:016x}", key);
            self.entry = None;
        }

        let (_, value) = self.entry.get_or_insert_with(|| (key, compute()));
        value
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
