//! Calculation logic for the Leave Entitlement Engine.
//!
//! This module contains all the calculation functions for determining
//! entitlement, including business-day counting against a holiday calendar,
//! reference period resolution for the rolling June 1 – May 31 cycles,
//! fractional-month accrual from a hire date, absence classification,
//! period splitting for absences straddling the cycle boundary, and the
//! final entitlement aggregation.

mod absence_classifier;
mod accrual;
mod business_days;
mod entitlement_report;
mod period_split;
mod reference_period;

pub use absence_classifier::is_debiting;
pub use accrual::{MONTHS_PER_YEAR, earned_days, months_worked};
pub use business_days::{count_business_days, is_business_day};
pub use entitlement_report::{build_report, compute_entitlement};
pub use period_split::{UsedDays, used_days_by_period};
pub use reference_period::{CYCLE_START_MONTH, resolve_periods};
