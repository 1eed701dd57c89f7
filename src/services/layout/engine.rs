//! Layout facade owning settings, holidays and memoized results.
//!
//! Nothing here is global: the UI layer builds one engine and passes it
//! around by reference.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::cache::{layout_key, LayoutCache};
use super::clock::{current_time_indicator, indicator_is_stale, Clock, TimeIndicator};
use super::composer::{compose_day, compose_week, DayLayout, WeekLayout};
use super::grid::HourGrid;
use super::month::month_grid;
use crate::error::Result;
use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::services::holiday::HolidayService;
use crate::services::moves::{propose_resize, ResizeEdge};
use crate::utils::date::{shift, week_dates, CalendarView};

pub struct LayoutEngine {
    settings: Settings,
    grid: HourGrid,
    holidays: HolidayService,
    day_cache: LayoutCache<DayLayout>,
    week_cache: LayoutCache<WeekLayout>,
}

impl LayoutEngine {
    pub fn new(settings: Settings) -> Self {
        let holidays = HolidayService::new(&settings.holiday_regions);
        Self::with_holidays(settings, holidays)
    }

    pub fn with_holidays(settings: Settings, holidays: HolidayService) -> Self {
        Self {
            grid: HourGrid::from_settings(&settings),
            settings,
            holidays,
            day_cache: LayoutCache::new(),
            week_cache: LayoutCache::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn grid(&self) -> &HourGrid {
        &self.grid
    }

    pub fn holidays(&self) -> &HolidayService {
        &self.holidays
    }

    /// Day layout for `date`, recomputed only when the inputs changed.
    pub fn day(&mut self, events: &[Event], date: NaiveDate) -> &DayLayout {
        let key = layout_key(events, &[date], &self.grid, self.holidays.holidays());
        let grid = self.grid;
        let holidays = self.holidays.holidays();
        self.day_cache
            .get_or_compute(key, || compose_day(events, date, &grid, holidays))
    }

    /// Week layout for the week containing `anchor`.
    pub fn week(&mut self, events: &[Event], anchor: NaiveDate) -> &WeekLayout {
        let first_day = self.settings.first_day_of_week;
        let dates = week_dates(anchor, first_day);
        let key = layout_key(events, &dates, &self.grid, self.holidays.holidays());
        let grid = self.grid;
        let holidays = self.holidays.holidays();
        self.week_cache.get_or_compute(key, || {
            compose_week(events, anchor, first_day, &grid, holidays)
        })
    }

    /// Dates shown by `view` for the page containing `anchor`.
    pub fn page_dates(&self, anchor: NaiveDate, view: CalendarView) -> Vec<NaiveDate> {
        let first_day = self.settings.first_day_of_week;
        match view {
            CalendarView::Day => vec![anchor],
            CalendarView::Week => week_dates(anchor, first_day),
            CalendarView::Month => month_grid(anchor, first_day),
        }
    }

    /// Anchor of the page `steps` pages away from `anchor`.
    pub fn navigate(&self, anchor: NaiveDate, view: CalendarView, steps: i32) -> Option<NaiveDate> {
        shift(anchor, view, steps)
    }

    /// "Now" line for the given displayed dates.
    pub fn time_indicator(
        &self,
        dates: &[NaiveDate],
        clock: &dyn Clock,
    ) -> Option<TimeIndicator> {
        current_time_indicator(dates, &self.grid, clock)
    }

    /// Whether `indicator` is older than the configured refresh cadence.
    /// A missing indicator always needs a refresh.
    pub fn indicator_needs_refresh(
        &self,
        indicator: Option<&TimeIndicator>,
        clock: &dyn Clock,
    ) -> bool {
        let cadence = Duration::seconds(self.settings.clock_refresh_secs as i64);
        indicator.map_or(true, |indicator| {
            indicator_is_stale(indicator.computed_at, clock.now(), cadence)
        })
    }

    /// Resize with the configured minimum duration.
    pub fn resize(
        &self,
        event: &Event,
        edge: ResizeEdge,
        new_time: NaiveDateTime,
    ) -> Result<Event> {
        let minimum = Duration::minutes(self.settings.min_resize_minutes);
        propose_resize(event, edge, new_time, minimum)
    }

    /// (hits, misses) across both caches.
    pub fn cache_stats(&self) -> (u64, u64) {
        (
            self.day_cache.hits() + self.week_cache.hits(),
            self.day_cache.misses() + self.week_cache.misses(),
        )
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
