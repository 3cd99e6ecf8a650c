//! Request types for the leave entitlement engine API.
//!
//! This module defines the JSON request structures for the `/entitlement`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AbsenceRecord, AbsenceStatus};

/// Request body for the `/entitlement` endpoint.
///
/// Contains all information needed to compute an entitlement report for
/// one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The employee's absence records (all statuses and types).
    #[serde(default)]
    pub absences: Vec<AbsenceRequest>,
    /// The as-of date for the report. Defaults to the current UTC day.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Employee information in an entitlement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

/// Absence information in an entitlement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceRequest {
    /// The absence type code (e.g., "conge_sans_solde").
    pub type_code: String,
    /// The workflow status of the absence request.
    pub status: AbsenceStatus,
    /// The first calendar day of the absence (inclusive).
    pub start_date: NaiveDate,
    /// The last calendar day of the absence (inclusive).
    pub end_date: NaiveDate,
}

impl From<AbsenceRequest> for AbsenceRecord {
    fn from(req: AbsenceRequest) -> Self {
        AbsenceRecord {
            type_code: req.type_code,
            status: req.status,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}
