//! # Error Types
//!
//! Structured error types for bolt_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! The strength formulas themselves never fail. Errors come from parsing
//! (grades, prompt input), input validation, and the bolt-count division.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::errors::{CalcError, CalcResult};
//!
//! fn validate_load(load_kn: f64) -> CalcResult<()> {
//!     if load_kn < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "factored_load_kn",
//!             load_kn.to_string(),
//!             "Load cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bolt_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Text input could not be parsed into the expected shape
    /// (bolt grade strings, numeric prompt answers)
    #[error("Input format error for '{field}': '{input}' - {reason}")]
    InputFormat {
        field: String,
        input: String,
        reason: String,
    },

    /// A computed quantity makes a subsequent operation undefined
    #[error("Domain error in {operation}: {reason}")]
    Domain { operation: String, reason: String },

    /// Material not found in catalogue
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InputFormat error
    pub fn input_format(field: impl Into<String>, input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InputFormat {
            field: field.into(),
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a Domain error
    pub fn domain(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Domain {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the user typed rather than by the numbers
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InputFormat { .. } | CalcError::InvalidInput { .. } | CalcError::MaterialNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InputFormat { .. } => "INPUT_FORMAT",
            CalcError::Domain { .. } => "DOMAIN_ERROR",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::domain("required_bolt_count", "Bolt value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Domain\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::domain("x", "y").error_code(), "DOMAIN_ERROR");
        assert_eq!(CalcError::input_format("grade", "46", "missing '.'").error_code(), "INPUT_FORMAT");
        assert_eq!(CalcError::material_not_found("E999").error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_input_errors() {
        assert!(CalcError::input_format("grade", "x", "bad").is_input_error());
        assert!(!CalcError::domain("x", "y").is_input_error());
        assert!(!CalcError::serialization("eof").is_input_error());
    }

    #[test]
    fn test_display() {
        let error = CalcError::input_format("bolt_grade", "46", "expected 'X.Y'");
        assert_eq!(
            error.to_string(),
            "Input format error for 'bolt_grade': '46' - expected 'X.Y'"
        );
    }
}
