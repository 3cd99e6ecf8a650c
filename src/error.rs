//! Error types for the Leave Entitlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure modes of entitlement computation and configuration loading.

use thiserror::Error;

/// The main error type for the Leave Entitlement Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An absence record was invalid or contained inconsistent data.
    #[error("Invalid absence of type '{type_code}': {message}")]
    InvalidAbsence {
        /// The type code of the invalid absence record.
        type_code: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A top-level report input (hire date, as-of date) failed validation.
    #[error("Invalid report input '{field}': {message}")]
    InvalidReportInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The holiday calendar does not cover every year the computation spans.
    #[error("Holiday calendar does not cover year(s): {}", format_years(.years))]
    MissingHolidayCoverage {
        /// The calendar years with no holiday data supplied.
        years: Vec<i32>,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

fn format_years(years: &[i32]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_absence_displays_type_and_message() {
        let error = EngineError::InvalidAbsence {
            type_code: "conge_sans_solde".to_string(),
            message: "start date after end date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid absence of type 'conge_sans_solde': start date after end date"
        );
    }

    #[test]
    fn test_invalid_report_input_displays_field_and_message() {
        let error = EngineError::InvalidReportInput {
            field: "as_of".to_string(),
            message: "more than one accrual cycle before the hire date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid report input 'as_of': more than one accrual cycle before the hire date"
        );
    }

    #[test]
    fn test_missing_holiday_coverage_lists_years() {
        let error = EngineError::MissingHolidayCoverage {
            years: vec![2023, 2024],
        };
        assert_eq!(
            error.to_string(),
            "Holiday calendar does not cover year(s): 2023, 2024"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative balance computed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: negative balance computed"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
