//! Entitlement aggregation and the top-level computation.
//!
//! [`build_report`] is the pure combination step: earned and used days per
//! cycle in, final report out. [`compute_entitlement`] is the engine's single
//! external operation, chaining validation, period resolution, the holiday
//! coverage pre-flight check, accrual and used-day aggregation.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AbsenceRecord, EntitlementReport, HolidayCalendar, PeriodBalance, ReferencePeriods,
};

use super::accrual::earned_days;
use super::period_split::{UsedDays, used_days_by_period};
use super::reference_period::resolve_periods;

/// How far before the hire date an as-of date may fall: one full accrual
/// cycle. Anything earlier is a caller mistake, not a retroactive report.
const AS_OF_SANITY_DAYS: i64 = 366;

/// Combines earned and used days per cycle into the final report.
///
/// - `remaining = max(0, earned - used)` for each cycle.
/// - The previous cycle expires once `as_of` passes the end of the current
///   cycle (prior-cycle leave survives through the whole following cycle);
///   when expired its remaining days are reported as 0 while earned/used
///   stay visible for audit.
/// - `max_advance_days` is the headroom against the full annual entitlement
///   for the current cycle.
///
/// Pure combination step: no state is mutated and no errors are raised here;
/// invalid inputs must be rejected upstream.
pub fn build_report(
    earned_previous: Decimal,
    earned_current: Decimal,
    used: UsedDays,
    periods: &ReferencePeriods,
    as_of: NaiveDate,
    annual_entitlement: Decimal,
) -> EntitlementReport {
    let remaining_previous = (earned_previous - used.previous).max(Decimal::ZERO);
    let remaining_current = (earned_current - used.current).max(Decimal::ZERO);

    let previous_expired = as_of > periods.current.end_date;
    let reported_previous = if previous_expired {
        Decimal::ZERO
    } else {
        remaining_previous
    };

    let total_remaining_days = (reported_previous + remaining_current)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let max_advance_days = (annual_entitlement - earned_current).max(Decimal::ZERO);

    EntitlementReport {
        previous: PeriodBalance {
            period: periods.previous,
            earned_days: earned_previous,
            used_days: used.previous,
            remaining_days: reported_previous,
        },
        current: PeriodBalance {
            period: periods.current,
            earned_days: earned_current,
            used_days: used.current,
            remaining_days: remaining_current,
        },
        previous_expired,
        total_remaining_days,
        can_take_advance_days: max_advance_days > Decimal::ZERO,
        max_advance_days,
    }
}

/// Computes the full entitlement report for one employee.
///
/// This is the engine's single external operation: a pure function of
/// (hire date, as-of date, absence list, holiday calendar, policy). It
/// performs no I/O and holds no state, so it is safe to call concurrently
/// with different inputs; identical inputs always yield identical reports.
///
/// # Arguments
///
/// * `hire_date` - The employee's hire date
/// * `absences` - The employee's absence records (all statuses and types)
/// * `calendar` - Public holidays covering every year the two cycles touch
/// * `policy` - Annual entitlement and debiting-type configuration
/// * `as_of` - The report date; defaults to the current UTC day
///
/// # Errors
///
/// - [`EngineError::InvalidReportInput`] when `as_of` precedes the hire date
///   by more than one full accrual cycle.
/// - [`EngineError::InvalidAbsence`] when any record has an inverted range.
/// - [`EngineError::MissingHolidayCoverage`] when the calendar has no data
///   for a year the computation spans.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::compute_entitlement;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy {
///     annual_entitlement_days: Decimal::from(25),
///     debiting_types: ["conge_sans_solde".to_string()].into_iter().collect(),
/// };
/// let mut calendar = HolidayCalendar::new();
/// for year in 2023..=2025 {
///     calendar.add_year(year, vec![]);
/// }
///
/// let report = compute_entitlement(
///     NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
///     &[],
///     &calendar,
///     &policy,
///     Some(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()),
/// )
/// .unwrap();
/// assert!(!report.previous_expired);
/// ```
pub fn compute_entitlement(
    hire_date: NaiveDate,
    absences: &[AbsenceRecord],
    calendar: &HolidayCalendar,
    policy: &LeavePolicy,
    as_of: Option<NaiveDate>,
) -> EngineResult<EntitlementReport> {
    let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());

    if as_of < hire_date - Duration::days(AS_OF_SANITY_DAYS) {
        return Err(EngineError::InvalidReportInput {
            field: "as_of".to_string(),
            message: format!(
                "as-of date {} is more than one accrual cycle before the hire date {}",
                as_of, hire_date
            ),
        });
    }

    for absence in absences {
        absence.validate()?;
    }

    let periods = resolve_periods(as_of);

    // Pre-flight: a year with no holiday data would silently under-exclude
    // holidays from every business-day count.
    let first_year = periods.previous.calendar_years().min().unwrap_or_default();
    let last_year = periods.current.calendar_years().max().unwrap_or_default();
    calendar.ensure_covers(first_year..=last_year)?;

    let earned_previous = earned_days(
        hire_date,
        &periods.previous,
        as_of,
        policy.annual_entitlement_days,
    );
    let earned_current = earned_days(
        hire_date,
        &periods.current,
        as_of,
        policy.annual_entitlement_days,
    );

    let used = used_days_by_period(absences, &periods, hire_date, calendar, policy)?;

    Ok(build_report(
        earned_previous,
        earned_current,
        used,
        &periods,
        as_of,
        policy.annual_entitlement_days,
    ))
}
