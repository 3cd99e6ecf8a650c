//! Core data models for the Leave Entitlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod entitlement;
mod holiday;
mod period;

pub use absence::{AbsenceRecord, AbsenceStatus};
pub use entitlement::{EntitlementReport, EntitlementResult, PeriodBalance};
pub use holiday::{HolidayCalendar, PublicHoliday};
pub use period::{ReferencePeriod, ReferencePeriods};
