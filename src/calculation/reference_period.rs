//! Reference period resolution.
//!
//! French CP accrual runs over rolling cycles from June 1 of one year to
//! May 31 of the next. At any as-of date two cycles are in scope: the one
//! containing the as-of date (CP N) and the one immediately before it
//! (CP N-1).

use chrono::{Datelike, NaiveDate};

use crate::models::{ReferencePeriod, ReferencePeriods};

/// The month (1-based) in which each accrual cycle starts.
pub const CYCLE_START_MONTH: u32 = 6;

/// Resolves the current and previous accrual cycles for an as-of date.
///
/// If the as-of month is June or later, the current cycle runs from June 1
/// of the as-of year through May 31 of the next year; otherwise it runs from
/// June 1 of the prior year through May 31 of the as-of year. The previous
/// cycle is always the current one shifted back by exactly one year, so
/// `previous.end_date + 1 day == current.start_date` holds for any input.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::resolve_periods;
/// use chrono::NaiveDate;
///
/// let periods = resolve_periods(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
/// assert_eq!(periods.current.start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert_eq!(periods.current.end_date, NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());
/// assert_eq!(periods.previous.start_date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
/// ```
pub fn resolve_periods(as_of: NaiveDate) -> ReferencePeriods {
    let cycle_start_year = if as_of.month() >= CYCLE_START_MONTH {
        as_of.year()
    } else {
        as_of.year() - 1
    };

    ReferencePeriods {
        previous: cycle_starting(cycle_start_year - 1),
        current: cycle_starting(cycle_start_year),
    }
}

/// Builds the cycle running June 1 of `year` through May 31 of `year + 1`.
fn cycle_starting(year: i32) -> ReferencePeriod {
    ReferencePeriod {
        start_date: NaiveDate::from_ymd_opt(year, CYCLE_START_MONTH, 1)
            .expect("June 1 is a valid date for any year"),
        end_date: NaiveDate::from_ymd_opt(year + 1, CYCLE_START_MONTH - 1, 31)
            .expect("May 31 is a valid date for any year"),
    }
}
