//! Entitlement report models.
//!
//! This module contains the [`EntitlementReport`] type and its associated
//! structures that capture the output of an entitlement computation: earned,
//! used and remaining days per accrual cycle, expiry, and advance eligibility.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReferencePeriod;

/// The earned/used/remaining balance for one accrual cycle.
///
/// # Example
///
/// ```
/// use leave_engine::models::{PeriodBalance, ReferencePeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let balance = PeriodBalance {
///     period: ReferencePeriod {
///         start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
///     },
///     earned_days: Decimal::from_str("15.26").unwrap(),
///     used_days: Decimal::from_str("6").unwrap(),
///     remaining_days: Decimal::from_str("9.26").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBalance {
    /// The accrual cycle this balance covers.
    pub period: ReferencePeriod,
    /// Days earned in this cycle, rounded to 2 decimals.
    pub earned_days: Decimal,
    /// Business days consumed by debiting absences in this cycle.
    pub used_days: Decimal,
    /// Days still available (`max(0, earned - used)`; reported as 0 for an
    /// expired previous cycle, while earned/used stay visible for audit).
    pub remaining_days: Decimal,
}

/// The complete output of an entitlement computation.
///
/// Recomputed fresh on every call; never persisted by the engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementReport {
    /// Balance for the previous cycle (CP N-1).
    pub previous: PeriodBalance,
    /// Balance for the current cycle (CP N).
    pub current: PeriodBalance,
    /// True when the previous cycle's leave can no longer be taken.
    pub previous_expired: bool,
    /// Total days still available across both cycles, rounded to 2 decimals.
    pub total_remaining_days: Decimal,
    /// True when the employee may take leave in advance of accrual.
    pub can_take_advance_days: bool,
    /// Headroom against the full annual entitlement for the current cycle.
    pub max_advance_days: Decimal,
}

/// The envelope returned by the API around an [`EntitlementReport`].
///
/// Adds identification and provenance fields so a stored or logged report
/// can be traced back to the computation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the report.
    pub engine_version: String,
    /// The ID of the employee the report is for.
    pub employee_id: String,
    /// The as-of date the report was computed against.
    pub as_of: NaiveDate,
    /// The computed entitlement report.
    pub report: EntitlementReport,
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

    fn sample_balance() -> PeriodBalance {
        PeriodBalance {
            period: ReferencePeriod {
                start_date: make_date("2024-06-01"),
                end_date: make_date("2025-05-31"),
            },
            earned_days: dec("15.26"),
            used_days: dec("6"),
            remaining_days: dec("9.26"),
        }
    }

    fn sample_report() -> EntitlementReport {
        EntitlementReport {
            previous: PeriodBalance {
                period: ReferencePeriod {
                    start_date: make_date("2023-06-01"),
                    end_date: make_date("2024-05-31"),
                },
                earned_days: dec("24.03"),
                used_days: dec("9"),
                remaining_days: dec("15.03"),
            },
            current: sample_balance(),
            previous_expired: false,
            total_remaining_days: dec("24.29"),
            can_take_advance_days: true,
            max_advance_days: dec("9.74"),
        }
    }

    #[test]
    fn test_serialize_period_balance() {
        let json = serde_json::to_string(&sample_balance()).unwrap();
        assert!(json.contains("\"earned_days\":\"15.26\""));
        assert!(json.contains("\"used_days\":\"6\""));
        assert!(json.contains("\"remaining_days\":\"9.26\""));
    }

    #[test]
    fn test_serialize_entitlement_report() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        assert!(json.contains("\"previous\":{"));
        assert!(json.contains("\"current\":{"));
        assert!(json.contains("\"previous_expired\":false"));
        assert!(json.contains("\"total_remaining_days\":\"24.29\""));
        assert!(json.contains("\"can_take_advance_days\":true"));
        assert!(json.contains("\"max_advance_days\":\"9.74\""));
    }

    #[test]
    fn test_deserialize_entitlement_report() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        let report: EntitlementReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, sample_report());
    }

    #[test]
    fn test_serialize_entitlement_result_envelope() {
        let result = EntitlementResult {
            report_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2025-01-10T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            employee_id: "emp_001".to_string(),
            as_of: make_date("2025-01-10"),
            report: sample_report(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"report_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"employee_id\":\"emp_001\""));
        assert!(json.contains("\"as_of\":\"2025-01-10\""));
        assert!(json.contains("\"report\":{"));
    }
}
