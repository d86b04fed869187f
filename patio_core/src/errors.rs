//! # Error Types
//!
//! Structured error types for patio_core. Every error is serializable so a
//! UI or API consumer can react to it programmatically instead of parsing
//! a message string.
//!
//! ## Example
//!
//! ```rust
//! use patio_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm < 1000.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width must be at least 1000 mm",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(500.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for patio_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for configuration, pricing and quote operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A configuration value is outside its allowed domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An option code does not name any known variant
    #[error("Unknown option for '{field}': {value}")]
    UnknownOption { field: String, value: String },

    /// No price exists for the requested item and size
    #[error("Price unavailable for {item}: {reason}")]
    PriceUnavailable { item: String, reason: String },

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

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
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

    /// Create an UnknownOption error
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a PriceUnavailable error
    pub fn price_unavailable(item: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::PriceUnavailable {
            item: item.into(),
            reason: reason.into(),
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

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownOption { .. } => "UNKNOWN_OPTION",
            CalcError::PriceUnavailable { .. } => "PRICE_UNAVAILABLE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("depth_mm", "4200", "Depth exceeds 3500 mm");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_option("roof_covering", "tin").error_code(), "UNKNOWN_OPTION");
        assert_eq!(
            CalcError::price_unavailable("base price", "no grid node").error_code(),
            "PRICE_UNAVAILABLE"
        );
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let err: CalcError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
