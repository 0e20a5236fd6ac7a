//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  ├── ValidationError   - One field failed one rule                     │
//! │  ├── ValidationErrors  - Every failing field of one submission         │
//! │  └── CoreError         - Domain failures (pricing, configuration)      │
//! │                                                                         │
//! │  storefront-api errors (app crate)                                     │
//! │  └── ApiError          - What the web frontend sees (JSON)             │
//! │                                                                         │
//! │  Flow: ValidationError → ValidationErrors → CoreError → ApiError       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every validation failure names the offending field
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse category of a validation failure.
///
/// The frontend uses this to pick an inline message style; the finer-grained
/// detail lives in the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Pattern or length mismatch (GSTIN, slug, pincode, URL).
    Format,
    /// Numeric bound violated (limit, offset, prep hours, fees).
    Range,
    /// Value outside an enumerated set.
    Enum,
    /// Field missing, or null where a value is mandatory.
    Required,
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// A field that cannot be cleared was sent as null.
    #[error("{field} cannot be null")]
    NotNullable { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field value must have an exact length.
    #[error("{field} must be exactly {expected} characters (got {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (pattern mismatch, not a number, not a URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotNullable { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }

    /// Category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Required { .. } | ValidationError::NotNullable { .. } => {
                ErrorKind::Required
            }
            ValidationError::TooShort { .. }
            | ValidationError::TooLong { .. }
            | ValidationError::InvalidLength { .. }
            | ValidationError::InvalidFormat { .. } => ErrorKind::Format,
            ValidationError::OutOfRange { .. } | ValidationError::Negative { .. } => {
                ErrorKind::Range
            }
            ValidationError::NotAllowed { .. } => ErrorKind::Enum,
        }
    }

    /// Serializable form for inline field messages.
    pub fn to_field_error(&self) -> FieldError {
        FieldError {
            field: self.field().to_string(),
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Wire form of a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

// =============================================================================
// Validation Errors (batch)
// =============================================================================

/// Every field failure collected from one submission.
///
/// Schemas validate all fields before returning so the UI can highlight
/// everything the user needs to fix in one round trip. An `Err` always holds
/// at least one error.
#[derive(Debug, Clone, PartialEq, Default, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty collector.
    pub fn new() -> Self {
        ValidationErrors(Vec::new())
    }

    /// Records one failure.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Records the error of a failed single-field check, if any.
    ///
    /// Returns the success value so callers can keep the parsed field.
    pub fn collect<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.push(e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Returns the first error recorded for `field`.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn to_field_errors(&self) -> Vec<FieldError> {
        self.0.iter().map(ValidationError::to_field_error).collect()
    }

    /// Converts the collector into a result: `Ok(value)` when nothing failed.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input rejected before any computation ran.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// An amount does not fit in the money representation.
    ///
    /// ## When This Occurs
    /// - Absurd quantities or prices from a tampered checkout request
    #[error("Amount overflow while computing {context}")]
    AmountOverflow { context: &'static str },

    /// Pricing configuration is inconsistent.
    #[error("Invalid pricing configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<ValidationError> for CoreError {
    fn from(error: ValidationError) -> Self {
        CoreError::Validation(error.into())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "slug".to_string(),
        };
        assert_eq!(err.to_string(), "slug is required");

        let err = ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        };
        assert_eq!(err.to_string(), "name must be at least 2 characters");

        let err = ValidationError::InvalidLength {
            field: "gstin".to_string(),
            expected: 15,
            actual: 7,
        };
        assert_eq!(
            err.to_string(),
            "gstin must be exactly 15 characters (got 7)"
        );
    }

    #[test]
    fn test_error_kinds() {
        let required = ValidationError::NotNullable {
            field: "name".to_string(),
        };
        assert_eq!(required.kind(), ErrorKind::Required);

        let range = ValidationError::OutOfRange {
            field: "limit".to_string(),
            min: 1,
            max: 100,
        };
        assert_eq!(range.kind(), ErrorKind::Range);

        let enum_err = ValidationError::NotAllowed {
            field: "type".to_string(),
            allowed: vec!["all".to_string()],
        };
        assert_eq!(enum_err.kind(), ErrorKind::Enum);
        assert_eq!(enum_err.field(), "type");
    }

    #[test]
    fn test_batch_collects_and_displays() {
        let mut errors = ValidationErrors::new();
        let kept: Option<u32> = errors.collect(Ok(5));
        assert_eq!(kept, Some(5));

        errors.collect::<()>(Err(ValidationError::Required {
            field: "name".to_string(),
        }));
        errors.push(ValidationError::Negative {
            field: "offset".to_string(),
        });

        assert_eq!(errors.len(), 2);
        assert!(errors.for_field("offset").is_some());
        assert_eq!(
            errors.to_string(),
            "name is required; offset must not be negative"
        );
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_field_error_serializes_snake_case_kind() {
        let err = ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "bad".to_string(),
        };
        let json = serde_json::to_value(err.to_field_error()).unwrap();
        assert_eq!(json["field"], "slug");
        assert_eq!(json["kind"], "format");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "pincode".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert_eq!(core_err.to_string(), "Validation failed: pincode is required");
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
