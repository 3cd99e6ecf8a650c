//! Public holiday and holiday calendar models.
//!
//! This module contains the [`PublicHoliday`] and [`HolidayCalendar`] types
//! used to exclude fixed holidays from business-day counting.
//!
//! The calendar tracks which calendar years it was supplied data for, so a
//! computation spanning a year with no holiday entries can be rejected up
//! front instead of silently under-excluding holidays.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a public holiday.
///
/// # Example
///
/// ```
/// use leave_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
///     name: "Fête nationale".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Fête nationale").
    pub name: String,
}

/// A multi-year set of public holiday dates.
///
/// Holidays are supplied per calendar year; the set of supplied years is
/// recorded explicitly so that [`HolidayCalendar::ensure_covers`] can flag
/// gaps before any business-day counting happens.
///
/// # Example
///
/// ```
/// use leave_engine::models::{HolidayCalendar, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let mut calendar = HolidayCalendar::new();
/// calendar.add_year(2024, vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
///     name: "Fête nationale".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()));
/// assert!(calendar.covers_year(2024));
/// assert!(!calendar.covers_year(2025));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
    covered_years: BTreeSet<i32>,
}

impl HolidayCalendar {
    /// Creates an empty calendar covering no years.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from a flat holiday list.
    ///
    /// Covered years are inferred from the dates present. Use
    /// [`HolidayCalendar::add_year`] instead when a year must count as
    /// covered regardless of how many entries it has.
    pub fn from_holidays(holidays: impl IntoIterator<Item = PublicHoliday>) -> Self {
        let mut calendar = Self::new();
        for holiday in holidays {
            calendar.covered_years.insert(holiday.date.year());
            calendar.dates.insert(holiday.date);
        }
        calendar
    }

    /// Registers one calendar year's holidays and marks the year as covered.
    ///
    /// Entries dated outside `year` are still stored; only `year` is marked
    /// covered by this call.
    pub fn add_year(&mut self, year: i32, holidays: Vec<PublicHoliday>) {
        self.covered_years.insert(year);
        for holiday in holidays {
            self.dates.insert(holiday.date);
        }
    }

    /// Checks if a given date is a listed public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Checks if holiday data was supplied for the given calendar year.
    pub fn covers_year(&self, year: i32) -> bool {
        self.covered_years.contains(&year)
    }

    /// Returns the years in `range` with no holiday data supplied.
    pub fn missing_years(&self, range: std::ops::RangeInclusive<i32>) -> Vec<i32> {
        range.filter(|year| !self.covers_year(*year)).collect()
    }

    /// Verifies that every year in `range` has holiday data.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingHolidayCoverage`] listing the gap years.
    pub fn ensure_covers(&self, range: std::ops::RangeInclusive<i32>) -> EngineResult<()> {
        let missing = self.missing_years(range);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EngineError::MissingHolidayCoverage { years: missing })
        }
    }
}
