//! Business-day calendar logic.
//!
//! This module is the single implementation of business-day counting: a date
//! counts iff its weekday is not Saturday/Sunday and it is not a listed
//! public holiday. Every consumer of business-day counts routes through
//! here so that split absences and whole absences agree.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::HolidayCalendar;

/// Determines whether a date is a business day.
///
/// A date is a business day iff its weekday is Monday through Friday and it
/// is not present in the holiday calendar.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_business_day;
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new();
///
/// // 2024-06-03 is a Monday
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(), &calendar));
/// // 2024-06-01 is a Saturday
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), &calendar));
/// ```
pub fn is_business_day(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !calendar.is_holiday(date)
}

/// Counts the business days in the inclusive range `[start, end]`.
///
/// Returns 0 when `start > end`. Pure and total over any date range,
/// including ranges spanning multiple calendar years.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::count_business_days;
/// use leave_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new();
/// let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(); // Monday
/// let end = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(); // Sunday
/// assert_eq!(count_business_days(start, end, &calendar), 5);
/// ```
pub fn count_business_days(start: NaiveDate, end: NaiveDate, calendar: &HolidayCalendar) -> u32 {
    if start > end {
        return 0;
    }

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| is_business_day(*date, calendar))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicHoliday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn calendar_with(dates: &[&str]) -> HolidayCalendar {
        HolidayCalendar::from_holidays(dates.iter().map(|d| PublicHoliday {
            date: make_date(d),
            name: "test holiday".to_string(),
        }))
    }

    #[test]
    fn test_weekday_is_business_day() {
        let calendar = HolidayCalendar::new();
        // 2024-06-03 is a Monday
        assert!(is_business_day(make_date("2024-06-03"), &calendar));
        // 2024-06-07 is a Friday
        assert!(is_business_day(make_date("2024-06-07"), &calendar));
    }

    #[test]
    fn test_saturday_is_not_business_day() {
        let calendar = HolidayCalendar::new();
        // 2024-06-01 is a Saturday
        assert!(!is_business_day(make_date("2024-06-01"), &calendar));
    }

    #[test]
    fn test_sunday_is_not_business_day() {
        let calendar = HolidayCalendar::new();
        // 2024-06-02 is a Sunday
        assert!(!is_business_day(make_date("2024-06-02"), &calendar));
    }

    #[test]
    fn test_listed_holiday_is_not_business_day() {
        // 2024-07-14 falls on a Sunday; use 2024-05-08 (Wednesday, Victoire 1945)
        let calendar = calendar_with(&["2024-05-08"]);
        assert!(!is_business_day(make_date("2024-05-08"), &calendar));
    }

    #[test]
    fn test_count_full_week() {
        let calendar = HolidayCalendar::new();
        // Monday 2024-06-03 through Sunday 2024-06-09
        assert_eq!(
            count_business_days(make_date("2024-06-03"), make_date("2024-06-09"), &calendar),
            5
        );
    }

    #[test]
    fn test_count_single_business_day() {
        let calendar = HolidayCalendar::new();
        assert_eq!(
            count_business_days(make_date("2024-06-03"), make_date("2024-06-03"), &calendar),
            1
        );
    }

    #[test]
    fn test_count_single_weekend_day() {
        let calendar = HolidayCalendar::new();
        assert_eq!(
            count_business_days(make_date("2024-06-01"), make_date("2024-06-01"), &calendar),
            0
        );
    }

    #[test]
    fn test_count_inverted_range_is_zero() {
        let calendar = HolidayCalendar::new();
        assert_eq!(
            count_business_days(make_date("2024-06-09"), make_date("2024-06-03"), &calendar),
            0
        );
    }

    #[test]
    fn test_count_excludes_holiday() {
        // Week of 2024-05-06 (Mon) to 2024-05-10 (Fri) contains Victoire 1945
        // on Wednesday 2024-05-08.
        let calendar = calendar_with(&["2024-05-08"]);
        assert_eq!(
            count_business_days(make_date("2024-05-06"), make_date("2024-05-10"), &calendar),
            4
        );
    }

    #[test]
    fn test_count_across_year_boundary() {
        // Monday 2024-12-30 through Friday 2025-01-03, with Jan 1 (Wednesday)
        // as a holiday: 30, 31, 2, 3 -> 4 business days.
        let calendar = calendar_with(&["2025-01-01"]);
        assert_eq!(
            count_business_days(make_date("2024-12-30"), make_date("2025-01-03"), &calendar),
            4
        );
    }

    #[test]
    fn test_count_multi_year_range() {
        // Full calendar year 2024 (leap year, 366 days): 52 weekends plus
        // Dec 28/29 -> 262 weekdays, minus the one listed holiday on a weekday.
        let calendar = calendar_with(&["2024-05-08"]);
        assert_eq!(
            count_business_days(make_date("2024-01-01"), make_date("2024-12-31"), &calendar),
            261
        );
    }
}
