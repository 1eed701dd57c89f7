//! Holiday overlay.
//!
//! A static table of regional holidays, filtered by the selected regions and
//! matched to days by exact calendar date.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::holiday::{Holiday, HolidayRegion};

const HOLIDAY_COLOR: &str = "#EF4444";

/// (region, year, month, day, name)
const BUILTIN: &[(HolidayRegion, i32, u32, u32, &str)] = &[
    (HolidayRegion::Kerala, 2023, 9, 7, "Onam"),
    (HolidayRegion::Kerala, 2023, 4, 15, "Vishu"),
    (HolidayRegion::Kerala, 2023, 12, 25, "Christmas"),
    (HolidayRegion::Kerala, 2023, 4, 22, "Eid al-Fitr"),
    (HolidayRegion::Kerala, 2024, 9, 15, "Onam"),
    (HolidayRegion::Kerala, 2024, 4, 14, "Vishu"),
    (HolidayRegion::Kerala, 2024, 12, 25, "Christmas"),
    (HolidayRegion::Kerala, 2024, 1, 26, "Republic Day"),
    (HolidayRegion::Kerala, 2024, 8, 15, "Independence Day"),
    (HolidayRegion::Kerala, 2024, 10, 2, "Gandhi Jayanti"),
    (HolidayRegion::Kerala, 2024, 4, 11, "Eid al-Fitr"),
    (HolidayRegion::Kerala, 2024, 6, 17, "Eid al-Adha"),
    (HolidayRegion::Kerala, 2025, 9, 5, "Onam"),
    (HolidayRegion::Kerala, 2025, 4, 14, "Vishu"),
    (HolidayRegion::Kerala, 2025, 12, 25, "Christmas"),
    (HolidayRegion::Uae, 2023, 1, 1, "New Year"),
    (HolidayRegion::Uae, 2023, 4, 22, "Eid al-Fitr"),
    (HolidayRegion::Uae, 2023, 6, 29, "Eid al-Adha"),
    (HolidayRegion::Uae, 2023, 7, 21, "Islamic New Year"),
    (HolidayRegion::Uae, 2023, 12, 2, "UAE National Day"),
    (HolidayRegion::Uae, 2024, 1, 1, "New Year"),
    (HolidayRegion::Uae, 2024, 4, 10, "Eid al-Fitr"),
    (HolidayRegion::Uae, 2024, 6, 17, "Eid al-Adha"),
    (HolidayRegion::Uae, 2024, 7, 8, "Islamic New Year"),
    (HolidayRegion::Uae, 2024, 9, 16, "Prophet Muhammad's Birthday"),
    (HolidayRegion::Uae, 2024, 12, 1, "Commemoration Day"),
    (HolidayRegion::Uae, 2024, 12, 2, "UAE National Day"),
    (HolidayRegion::Uae, 2025, 1, 1, "New Year"),
    (HolidayRegion::Uae, 2025, 3, 31, "Eid al-Fitr"),
    (HolidayRegion::Uae, 2025, 6, 7, "Eid al-Adha"),
    (HolidayRegion::Global, 2024, 1, 1, "New Year"),
    (HolidayRegion::Global, 2024, 3, 8, "International Women's Day"),
    (HolidayRegion::Global, 2024, 4, 22, "Earth Day"),
    (HolidayRegion::Global, 2025, 1, 1, "New Year"),
];

/// The built-in holiday table. Ids follow `<region>-<n>-<year>`.
pub fn builtin_holidays() -> Vec<Holiday> {
    let mut counters: BTreeMap<(HolidayRegion, i32), usize> = BTreeMap::new();

    BUILTIN
        .iter()
        .filter_map(|(region, year, month, day, name)| {
            let date = NaiveDate::from_ymd_opt(*year, *month, *day)?;
            let counter = counters.entry((*region, *year)).or_insert(0);
            *counter += 1;
            let id = format!(
                "{}-{}-{}",
                region.as_str().to_ascii_lowercase(),
                counter,
                year
            );
            Some(Holiday::new(id, *name, date, *region).with_color(HOLIDAY_COLOR))
        })
        .collect()
}

/// Holidays falling exactly on `date`, in table order.
pub fn holidays_for_date(holidays: &[Holiday], date: NaiveDate) -> Vec<Holiday> {
    holidays
        .iter()
        .filter(|holiday| holiday.date == date)
        .cloned()
        .collect()
}

/// Holidays in `[from, to]`, grouped by date.
pub fn holidays_in_range(
    holidays: &[Holiday],
    from: NaiveDate,
    to: NaiveDate,
) -> BTreeMap<NaiveDate, Vec<Holiday>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<Holiday>> = BTreeMap::new();
    for holiday in holidays
        .iter()
        .filter(|holiday| holiday.date >= from && holiday.date <= to)
    {
        grouped.entry(holiday.date).or_default().push(holiday.clone());
    }
    grouped
}

/// Holidays for the selected regions.
pub struct HolidayService {
    holidays: Vec<Holiday>,
}

impl HolidayService {
    /// Built-in table filtered to `regions`. An empty selection or one
    /// containing `All` keeps every region.
    pub fn new(regions: &[HolidayRegion]) -> Self {
        Self::from_holidays(builtin_holidays(), regions)
    }

    pub fn from_holidays(holidays: Vec<Holiday>, regions: &[HolidayRegion]) -> Self {
        let holidays = if regions.is_empty() || regions.contains(&HolidayRegion::All) {
            holidays
        } else {
            holidays
                .into_iter()
                .filter(|holiday| regions.iter().any(|region| region.selects(holiday.region)))
                .collect()
        };

        log::debug!("Loaded {} holidays for regions {:?}", holidays.len(), regions);
        Self { holidays }
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn for_date(&self, date: NaiveDate) -> Vec<Holiday> {
        holidays_for_date(&self.holidays, date)
    }

    pub fn in_range(&self, from: NaiveDate, to: NaiveDate) -> BTreeMap<NaiveDate, Vec<Holiday>> {
        holidays_in_range(&self.holidays, from, to)
    }
}
