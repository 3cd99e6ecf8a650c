//! Period splitting and used-days aggregation.
//!
//! Walks the absence list, keeps the approved debiting records, counts the
//! business days each one consumes, and apportions those days between the
//! previous and current accrual cycles. An absence straddling the June 1
//! boundary is split into two sub-ranges counted independently; since
//! `previous.end + 1 day == current.start` the sub-ranges never overlap and
//! never leave a gap, so the split conserves the total count.

use rust_decimal::Decimal;

use chrono::NaiveDate;

use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::{AbsenceRecord, HolidayCalendar, ReferencePeriods};

use super::absence_classifier::is_debiting;
use super::business_days::count_business_days;

/// Business days consumed per accrual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsedDays {
    /// Days consumed in the previous cycle (CP N-1).
    pub previous: Decimal,
    /// Days consumed in the current cycle (CP N).
    pub current: Decimal,
}

/// Aggregates the business days consumed by debiting absences per cycle.
///
/// For each approved debiting absence ending on or after the hire date:
/// - the start is clipped to the hire date;
/// - an absence ending within the previous cycle counts entirely there;
/// - an absence starting within the current cycle counts entirely there;
/// - an absence straddling the boundary is split at it, each side counted
///   independently.
///
/// Counts accumulate as integers across all absences and are converted to
/// `Decimal` once at the end, so no per-absence rounding can drift.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidAbsence`] when any record
/// (debiting or not) has `start_date > end_date`; malformed data aborts the
/// computation rather than being skipped.
pub fn used_days_by_period(
    absences: &[AbsenceRecord],
    periods: &ReferencePeriods,
    hire_date: NaiveDate,
    calendar: &HolidayCalendar,
    policy: &LeavePolicy,
) -> EngineResult<UsedDays> {
    let mut used_previous: u32 = 0;
    let mut used_current: u32 = 0;

    for absence in absences {
        absence.validate()?;

        if !is_debiting(absence, policy) {
            continue;
        }

        // Entirely before employment began.
        if absence.end_date < hire_date {
            continue;
        }

        let clipped_start = absence.start_date.max(hire_date);

        if absence.end_date <= periods.previous.end_date {
            used_previous += count_business_days(clipped_start, absence.end_date, calendar);
        } else if clipped_start >= periods.current.start_date {
            used_current += count_business_days(clipped_start, absence.end_date, calendar);
        } else {
            used_previous +=
                count_business_days(clipped_start, periods.previous.end_date, calendar);
            used_current +=
                count_business_days(periods.current.start_date, absence.end_date, calendar);
        }
    }

    Ok(UsedDays {
        previous: Decimal::from(used_previous),
        current: Decimal::from(used_current),
    })
}
