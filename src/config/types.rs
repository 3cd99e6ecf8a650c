//! Configuration types for the leave policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::PublicHoliday;

/// Metadata about the leave policy.
///
/// Identifies which legal regime or collective agreement the policy
/// parameters were taken from.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The policy code (e.g., "CP-FR").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy parameters.
    pub version: String,
    /// URL to the legal reference for this policy.
    pub source_url: String,
}

/// The business-policy parameters of the entitlement computation.
///
/// These are policy subject to change (collective agreements override the
/// statutory defaults), so they live in configuration rather than code.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavePolicy {
    /// Days earned per full accrual cycle (statutory: 25 working days).
    pub annual_entitlement_days: Decimal,
    /// Absence type codes whose approved instances debit entitlement.
    pub debiting_types: HashSet<String>,
}

impl LeavePolicy {
    /// Checks if an absence type code debits entitlement under this policy.
    pub fn is_debiting_type(&self, type_code: &str) -> bool {
        self.debiting_types.contains(type_code)
    }
}

/// The policy.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// The policy parameters.
    pub policy: LeavePolicy,
}

/// A holidays/<year>.yaml file structure.
///
/// One file per calendar year; the `year` field marks that year as covered
/// in the resulting [`crate::models::HolidayCalendar`] even if the holiday
/// list were empty.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The calendar year this file covers.
    pub year: i32,
    /// The public holidays of that year.
    pub holidays: Vec<PublicHoliday>,
}
