//! Configuration loading and management for the Leave Entitlement Engine.
//!
//! This module provides functionality to load the leave policy (annual
//! entitlement, debiting absence types) and the per-year public holiday
//! files from a YAML configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cp_fr").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayFile, LeavePolicy, PolicyConfig, PolicyMetadata};
