//! Accrual calculation functionality.
//!
//! CP days are earned at `annual_entitlement / 12` per month worked (2.0833
//! per month for the statutory 25 days). Months are day-prorated: a partial
//! first or last month contributes `days worked in month / days in month`.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::ReferencePeriod;

/// The number of accrual months per cycle.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Calculates the fractional number of days earned within one accrual cycle.
///
/// The effective work window is `[max(hire_date, period.start_date),
/// min(cutoff, period.end_date)]`. An empty or inverted window earns 0.
///
/// # Arguments
///
/// * `hire_date` - The employee's hire date
/// * `period` - The accrual cycle boundaries
/// * `cutoff` - The computation cutoff (typically the as-of date)
/// * `annual_entitlement` - Days earned per full cycle (statutory: 25)
///
/// # Returns
///
/// Days earned, rounded to 2 decimals (midpoint away from zero).
///
/// # Example
///
/// ```
/// use leave_engine::calculation::earned_days;
/// use leave_engine::models::ReferencePeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let period = ReferencePeriod {
///     start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
/// };
///
/// // Hired before the cycle, cutoff after it: the full 25 days.
/// let earned = earned_days(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     &period,
///     NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     Decimal::from(25),
/// );
/// assert_eq!(earned, Decimal::from_str("25.00").unwrap());
/// ```
pub fn earned_days(
    hire_date: NaiveDate,
    period: &ReferencePeriod,
    cutoff: NaiveDate,
    annual_entitlement: Decimal,
) -> Decimal {
    if hire_date > period.end_date {
        return Decimal::ZERO;
    }

    let work_start = hire_date.max(period.start_date);
    let work_end = cutoff.min(period.end_date);
    if work_start > work_end {
        return Decimal::ZERO;
    }

    let months = months_worked(work_start, work_end);

    // Multiply before dividing so a full cycle comes out at exactly the
    // annual entitlement.
    (months * annual_entitlement / Decimal::from(MONTHS_PER_YEAR))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the fractional months in the inclusive window `[start, end]`.
///
/// Whole calendar months contribute 1.0 each; a partial first or last month
/// contributes `days in window / days in that calendar month`. When both
/// bounds fall in the same month the fraction is `inclusive days / days in
/// month`. Returns 0 when `start > end`.
pub fn months_worked(start: NaiveDate, end: NaiveDate) -> Decimal {
    if start > end {
        return Decimal::ZERO;
    }

    if start.year() == end.year() && start.month() == end.month() {
        let days = end.day() - start.day() + 1;
        return Decimal::from(days) / Decimal::from(days_in_month(start.year(), start.month()));
    }

    let first_month_days = days_in_month(start.year(), start.month());
    let first_fraction =
        Decimal::from(first_month_days - start.day() + 1) / Decimal::from(first_month_days);
    let last_fraction = Decimal::from(end.day()) / Decimal::from(days_in_month(end.year(), end.month()));

    // Whole months strictly between the first and last partial months.
    let whole_months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32 - 1;

    Decimal::from(whole_months) + first_fraction + last_fraction
}

/// Returns the number of days in the given calendar month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of month is a valid date");

    first_of_next
        .pred_opt()
        .expect("month has a last day")
        .day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn cycle(start: &str, end: &str) -> ReferencePeriod {
        ReferencePeriod {
            start_date: make_date(start),
            end_date: make_date(end),
        }
    }

    fn annual() -> Decimal {
        Decimal::from(25)
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 6), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_months_worked_same_month_full() {
        // All of June 2024.
        assert_eq!(
            months_worked(make_date("2024-06-01"), make_date("2024-06-30")),
            Decimal::ONE
        );
    }

    #[test]
    fn test_months_worked_same_month_partial() {
        // June 15 through June 30: 16 days of 30.
        assert_eq!(
            months_worked(make_date("2024-06-15"), make_date("2024-06-30")),
            Decimal::from(16) / Decimal::from(30)
        );
    }

    #[test]
    fn test_months_worked_full_cycle_is_twelve() {
        assert_eq!(
            months_worked(make_date("2023-06-01"), make_date("2024-05-31")),
            Decimal::from(12)
        );
    }

    #[test]
    fn test_months_worked_partial_first_and_last() {
        // June 15, 2023 through January 10, 2024:
        // 16/30 for June, six whole months (Jul-Dec), 10/31 for January.
        let expected =
            Decimal::from(6) + Decimal::from(16) / Decimal::from(30) + Decimal::from(10) / Decimal::from(31);
        assert_eq!(
            months_worked(make_date("2023-06-15"), make_date("2024-01-10")),
            expected
        );
    }

    #[test]
    fn test_months_worked_inverted_range_is_zero() {
        assert_eq!(
            months_worked(make_date("2024-06-30"), make_date("2024-06-01")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_earned_full_cycle_is_annual_entitlement() {
        let period = cycle("2023-06-01", "2024-05-31");
        let earned = earned_days(make_date("2020-01-01"), &period, make_date("2025-01-10"), annual());
        assert_eq!(earned, dec("25.00"));
    }

    #[test]
    fn test_earned_zero_when_hired_after_period_end() {
        let period = cycle("2023-06-01", "2024-05-31");
        let earned = earned_days(make_date("2024-07-01"), &period, make_date("2025-01-10"), annual());
        assert_eq!(earned, Decimal::ZERO);
    }

    #[test]
    fn test_earned_zero_when_cutoff_before_period_start() {
        let period = cycle("2024-06-01", "2025-05-31");
        let earned = earned_days(make_date("2020-01-01"), &period, make_date("2024-01-15"), annual());
        assert_eq!(earned, Decimal::ZERO);
    }

    #[test]
    fn test_earned_hire_on_period_end_is_prorated() {
        // Hire date equal to the period end: one day of the last month.
        let period = cycle("2023-06-01", "2024-05-31");
        let earned = earned_days(make_date("2024-05-31"), &period, make_date("2025-01-10"), annual());
        // 1/31 month * 25/12 = 0.0672... -> 0.07
        assert_eq!(earned, dec("0.07"));
    }

    #[test]
    fn test_earned_mid_june_hire_for_first_cycle() {
        // Hired 2023-06-15, cutoff past the cycle: 11 + 16/30 months.
        let period = cycle("2023-06-01", "2024-05-31");
        let earned = earned_days(make_date("2023-06-15"), &period, make_date("2025-01-10"), annual());
        // (11 + 16/30) * 25 / 12 = 24.0277... -> 24.03
        assert_eq!(earned, dec("24.03"));
    }

    #[test]
    fn test_earned_cycle_in_progress() {
        // Hired before the cycle, cutoff 2025-01-10 inside it: 7 + 10/31 months.
        let period = cycle("2024-06-01", "2025-05-31");
        let earned = earned_days(make_date("2023-06-15"), &period, make_date("2025-01-10"), annual());
        // (7 + 10/31) * 25 / 12 = 15.2553... -> 15.26
        assert_eq!(earned, dec("15.26"));
    }

    #[test]
    fn test_earned_single_full_month() {
        let period = cycle("2024-06-01", "2025-05-31");
        let earned = earned_days(make_date("2024-06-01"), &period, make_date("2024-06-30"), annual());
        // 1 month * 25 / 12 = 2.0833... -> 2.08
        assert_eq!(earned, dec("2.08"));
    }

    #[test]
    fn test_earned_is_never_negative() {
        let period = cycle("2024-06-01", "2025-05-31");
        for (hire, cutoff) in [
            ("2030-01-01", "2025-01-10"),
            ("2024-06-01", "2020-01-01"),
            ("2025-06-01", "2025-06-30"),
        ] {
            let earned = earned_days(make_date(hire), &period, make_date(cutoff), annual());
            assert!(earned >= Decimal::ZERO);
        }
    }
}
