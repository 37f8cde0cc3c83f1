//! # Error Types
//!
//! Structured error types for est_core.
//!
//! The estimation pipeline is deliberately hard to kill: catalog misses,
//! malformed spacing notation and near-empty inputs all degrade to documented
//! defaults inside the generators (see the module docs there). `EstError`
//! therefore only appears at the boundaries - CSV import with a missing
//! header column, JSON (de)serialization in frontends - never for
//! business-data reasons inside `calculate()`.
//!
//! ## Example
//!
//! ```rust
//! use est_core::errors::{EstError, EstResult};
//!
//! fn require_column(found: bool) -> EstResult<()> {
//!     if !found {
//!         return Err(EstError::missing_column("qty"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for est_core operations
pub type EstResult<T> = Result<T, EstError>;

/// Structured error type for estimation boundary operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by frontends and import tooling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required CSV header column is missing
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A CSV row could not be parsed (reported per-row, import continues)
    #[error("Row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EstError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingColumn error
    pub fn missing_column(column: impl Into<String>) -> Self {
        EstError::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a MalformedRow error
    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        EstError::MalformedRow {
            row,
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstError::InvalidInput { .. } => "INVALID_INPUT",
            EstError::MissingColumn { .. } => "MISSING_COLUMN",
            EstError::MalformedRow { .. } => "MALFORMED_ROW",
            EstError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EstError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EstError::invalid_input("spans", "abc", "not a spacing list");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EstError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(EstError::missing_column("qty").error_code(), "MISSING_COLUMN");
        assert_eq!(EstError::malformed_row(3, "short row").error_code(), "MALFORMED_ROW");
    }
}
