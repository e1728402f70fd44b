//! # Error Types
//!
//! Structured error types for mat_core. Two layers exist side by side:
//!
//! - [`CardError`] - hard failures that abort an operation (missing
//!   material name, unwritable destination, bad CSV file).
//! - [`Reason`] - non-fatal diagnostics attached to a partial
//!   [`crate::derive::DerivedProperties`]. A missing or non-numeric
//!   input never aborts the derivation; it simply leaves the affected
//!   quantity absent and records why.
//!
//! ## Example
//!
//! ```rust
//! use mat_core::errors::{CardError, CardResult};
//!
//! fn require_name(name: &str) -> CardResult<()> {
//!     if name.trim().is_empty() {
//!         return Err(CardError::missing_field("name"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mat_core operations
pub type CardResult<T> = Result<T, CardError>;

/// Structured error type for aborting failures.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by the calling shell.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CardError {
    /// An input value is invalid (wrong type, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material not found in the loaded table
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

impl CardError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CardError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CardError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CardError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CardError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CardError::InvalidInput { .. } => "INVALID_INPUT",
            CardError::MissingField { .. } => "MISSING_FIELD",
            CardError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CardError::FileError { .. } => "FILE_ERROR",
            CardError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Non-fatal diagnostic attached to a partial derivation.
///
/// Every absent derived quantity carries exactly one of these, naming
/// the unmet condition in human-readable form. The display text is
/// what gets appended verbatim to the plasticity card's warnings
/// block, so it must stand on its own.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum Reason {
    /// A prerequisite input (raw field or earlier derived quantity)
    /// is absent.
    #[error("{quantity}: missing {field}.")]
    MissingInput { quantity: String, field: String },

    /// A field is present in the record but not parseable as a number.
    #[error("Field '{field}': value '{value}' is not numeric.")]
    NonNumericInput { field: String, value: String },

    /// A computed intermediate left the mathematical domain
    /// (logarithm of a non-positive argument, division by zero).
    #[error("{quantity}: {detail}.")]
    DomainError { quantity: String, detail: String },
}

impl Reason {
    /// Create a MissingInput reason
    pub fn missing_input(quantity: impl Into<String>, field: impl Into<String>) -> Self {
        Reason::MissingInput {
            quantity: quantity.into(),
            field: field.into(),
        }
    }

    /// Create a NonNumericInput reason
    pub fn non_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        Reason::NonNumericInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a DomainError reason
    pub fn domain(quantity: impl Into<String>, detail: impl Into<String>) -> Self {
        Reason::DomainError {
            quantity: quantity.into(),
            detail: detail.into(),
        }
    }

    /// Get a short code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            Reason::MissingInput { .. } => "MISSING_INPUT",
            Reason::NonNumericInput { .. } => "NON_NUMERIC_INPUT",
            Reason::DomainError { .. } => "DOMAIN_ERROR",
        }
    }

    /// Check whether this reason cites the given field or quantity name.
    pub fn cites(&self, name: &str) -> bool {
        match self {
            Reason::MissingInput { quantity, field } => quantity == name || field == name,
            Reason::NonNumericInput { field, .. } => field == name,
            Reason::DomainError { quantity, .. } => quantity == name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CardError::invalid_input("name", "42", "Name must be text");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CardError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CardError::missing_field("name").error_code(), "MISSING_FIELD");
        assert_eq!(CardError::material_not_found("Steel-A").error_code(), "MATERIAL_NOT_FOUND");
        let serialization = CardError::SerializationError {
            reason: "bad json".to_string(),
        };
        assert_eq!(serialization.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_reason_display_cites_field() {
        let reason = Reason::missing_input("Nominal strain at UTS", "%EL");
        let text = reason.to_string();
        assert_eq!(text, "Nominal strain at UTS: missing %EL.");
        assert!(reason.cites("%EL"));
        assert!(reason.cites("Nominal strain at UTS"));
        assert!(!reason.cites("UTS"));
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(Reason::non_numeric("Density", "soft").code(), "NON_NUMERIC_INPUT");
        assert_eq!(
            Reason::domain("At yield true strain", "log of non-positive argument").code(),
            "DOMAIN_ERROR"
        );
    }

    #[test]
    fn test_reason_serialization() {
        let reason = Reason::domain("Plastic strain at UTS", "division by zero");
        let json = serde_json::to_string(&reason).unwrap();
        let roundtrip: Reason = serde_json::from_str(&json).unwrap();
        assert_eq!(reason, roundtrip);
    }
}
