//! Leave Entitlement & Absence Accounting Engine.
//!
//! This crate computes French statutory paid-leave ("congés payés", CP)
//! entitlement under the rolling June 1 – May 31 accrual scheme: days earned
//! per cycle from a hire date, days consumed by approved debiting absences
//! (counted in business days against a multi-year holiday calendar, split
//! across cycles when an absence straddles the June 1 boundary), and the
//! remaining balance per cycle with expiry and advance-day eligibility.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
