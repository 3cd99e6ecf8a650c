//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! policy and holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

use super::types::{HolidayFile, LeavePolicy, PolicyConfig, PolicyMetadata};

/// Loads and provides access to the leave policy configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the policy parameters and the multi-year holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/cp_fr/
/// ├── policy.yaml      # Policy metadata, annual entitlement, debiting types
/// └── holidays/
///     ├── 2023.yaml    # Public holidays for 2023
///     ├── 2024.yaml
///     └── ...
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cp_fr").unwrap();
/// assert!(loader.policy().is_debiting_type("conge_sans_solde"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: PolicyMetadata,
    policy: LeavePolicy,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/cp_fr")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` or the `holidays/` directory is missing
    /// - Any file contains invalid YAML
    /// - No holiday file is present at all
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_config = Self::load_yaml::<PolicyConfig>(&policy_path)?;

        let holidays_dir = path.join("holidays");
        let calendar = Self::load_holidays(&holidays_dir)?;

        Ok(Self {
            metadata: policy_config.metadata,
            policy: policy_config.policy,
            calendar,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all per-year holiday files into a single calendar.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<HolidayCalendar> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut calendar = HolidayCalendar::new();
        let mut file_count = 0;

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<HolidayFile>(&path)?;
                calendar.add_year(file.year, file.holidays);
                file_count += 1;
            }
        }

        if file_count == 0 {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        Ok(calendar)
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the policy parameters.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the holiday calendar assembled from the per-year files.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
