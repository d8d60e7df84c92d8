//! # Error Types
//!
//! Structured error types for beam_core. Every failure carries enough
//! context (field name, offending value, reason) for a caller to report
//! or fix the problem without parsing a message string.
//!
//! Two families matter for the engine itself:
//!
//! - configuration errors ([`BeamError::MissingField`]) are raised while a
//!   load is being built, never deferred to solve time
//! - validation errors ([`BeamError::InvalidInput`]) are raised at the start
//!   of [`solve`](crate::calculations::solve), before any array is computed
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length_mm: f64) -> BeamResult<usize> {
//!     let rounded = length_mm.round_ties_even();
//!     if !(rounded >= 1.0) {
//!         return Err(BeamError::invalid_input(
//!             "length_mm",
//!             length_mm.to_string(),
//!             "length must be at least 1 mm",
//!         ));
//!     }
//!     Ok(rounded as usize)
//! }
//!
//! assert!(validate_length(0.5).is_err());
//! assert_eq!(validate_length(999.6).unwrap(), 1000);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (out of range, inconsistent length, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

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

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        BeamError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        BeamError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for configuration and validation errors, i.e. problems with the
    /// numbers handed in rather than with the filesystem.
    pub fn is_input_error(&self) -> bool {
        matches!(self, BeamError::InvalidInput { .. } | BeamError::MissingField { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::MissingField { .. } => "MISSING_FIELD",
            BeamError::FileError { .. } => "FILE_ERROR",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BeamError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            BeamError::invalid_input("supports", "(300, 300)", "Two identical supports found");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BeamError::missing_field("force or kg").error_code(), "MISSING_FIELD");
        assert_eq!(BeamError::serialization("bad json").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(BeamError::missing_field("position").is_input_error());
        assert!(BeamError::invalid_input("length_mm", "0", "too short").is_input_error());
        assert!(!BeamError::file_error("open", "/tmp/x", "denied").is_input_error());
    }

    #[test]
    fn test_error_display() {
        let error = BeamError::missing_field("start/end");
        assert_eq!(error.to_string(), "Missing required field: start/end");
    }
}
