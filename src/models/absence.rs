//! Absence record model and related types.
//!
//! This module defines the AbsenceRecord struct and AbsenceStatus enum
//! for representing employee absences in the entitlement computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the workflow status of an absence record.
///
/// Only [`AbsenceStatus::Approved`] records participate in used-day
/// accounting; every other status is excluded from the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    /// Awaiting manager decision.
    Pending,
    /// Approved; debits entitlement when the type is a debiting one.
    Approved,
    /// Refused by the manager.
    Refused,
    /// Withdrawn by the employee before or after approval.
    Cancelled,
}

/// Represents a recorded absence for an employee.
///
/// The date range is inclusive on both ends and compared at day granularity.
///
/// # Example
///
/// ```
/// use leave_engine::models::{AbsenceRecord, AbsenceStatus};
/// use chrono::NaiveDate;
///
/// let absence = AbsenceRecord {
///     type_code: "conge_sans_solde".to_string(),
///     status: AbsenceStatus::Approved,
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
/// };
/// assert!(absence.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    /// The absence type code (e.g., "conge_sans_solde", "conge_maladie").
    pub type_code: String,
    /// The workflow status of the record.
    pub status: AbsenceStatus,
    /// The first day of the absence (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the absence (inclusive).
    pub end_date: NaiveDate,
}

impl AbsenceRecord {
    /// Checks the record's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAbsence`] when `start_date > end_date`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidAbsence {
                type_code: self.type_code.clone(),
                message: format!(
                    "start date {} is after end date {}",
                    self.start_date, self.end_date
                ),
            });
        }
        Ok(())
    }

    /// Returns true if the record is approved.
    pub fn is_approved(&self) -> bool {
        self.status == AbsenceStatus::Approved
    }
}
