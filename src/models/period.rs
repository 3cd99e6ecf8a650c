//! Reference period models.
//!
//! This module contains the [`ReferencePeriod`] and [`ReferencePeriods`] types
//! that define the accrual cycles over which entitlement is computed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents one accrual cycle (June 1 of some year through May 31 of the next).
///
/// Both bounds are inclusive.
///
/// # Example
///
/// ```
/// use leave_engine::models::ReferencePeriod;
/// use chrono::NaiveDate;
///
/// let period = ReferencePeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePeriod {
    /// The first day of the cycle (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the cycle (inclusive).
    pub end_date: NaiveDate,
}

impl ReferencePeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns every calendar year this period touches.
    pub fn calendar_years(&self) -> std::ops::RangeInclusive<i32> {
        self.start_date.year()..=self.end_date.year()
    }
}

/// The two accrual cycles in scope at any as-of date.
///
/// Invariant: `previous.end_date + 1 day == current.start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePeriods {
    /// The cycle immediately before the current one (CP N-1).
    pub previous: ReferencePeriod,
    /// The cycle containing the as-of date (CP N).
    pub current: ReferencePeriod,
}
