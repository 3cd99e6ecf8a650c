//! Absence classification logic.
//!
//! Decides whether an absence record debits entitlement. Only approved
//! records of a type listed in the policy's debiting set participate in
//! used-day accounting; everything else (sick leave, informational types,
//! pending or refused requests) is excluded entirely.

use crate::config::LeavePolicy;
use crate::models::AbsenceRecord;

/// Determines whether an absence record debits entitlement.
///
/// True iff the record is approved and its type code is in the policy's
/// configured debiting-type set. The set is business policy and comes from
/// configuration, never from code.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_debiting;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::{AbsenceRecord, AbsenceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy {
///     annual_entitlement_days: Decimal::from(25),
///     debiting_types: ["conge_sans_solde".to_string()].into_iter().collect(),
/// };
///
/// let absence = AbsenceRecord {
///     type_code: "conge_sans_solde".to_string(),
///     status: AbsenceStatus::Approved,
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 5, 24).unwrap(),
/// };
/// assert!(is_debiting(&absence, &policy));
/// ```
pub fn is_debiting(absence: &AbsenceRecord, policy: &LeavePolicy) -> bool {
    absence.is_approved() && policy.is_debiting_type(&absence.type_code)
}
