//! # Validation Module
//!
//! Single-field rules shared by the search and partner schemas.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web form (TypeScript)                                        │
//! │  ├── Basic format checks, immediate feedback                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: storefront-api handler (Rust)                                │
//! │  ├── JSON shape (serde deserialization)                                │
//! │  └── Schemas built from THIS MODULE's rules                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hosted database                                              │
//! │  └── NOT NULL / UNIQUE / row-level security                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule returns a [`ValidationError`] naming the field it was given,
//! so schemas can collect them into a [`crate::ValidationErrors`] batch.
//!
//! ## Usage
//! ```rust
//! use bazaar_core::validation::{validate_slug, validate_pincode};
//!
//! assert!(validate_slug("slug", "fresh-mart-2").is_ok());
//! assert!(validate_pincode("pincode", "56003").is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::money::Money;
use crate::PINCODE_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("invalid slug pattern"));

// =============================================================================
// String Validators
// =============================================================================

/// Validates a trimmed text field with a minimum length.
///
/// ## Rules
/// - Leading/trailing whitespace is ignored
/// - At least `min` characters remain
///
/// ## Returns
/// The trimmed value.
pub fn validate_min_len(field: &str, value: &str, min: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.chars().count() < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }

    Ok(value.to_string())
}

/// Validates that a value is at most `max` characters long.
///
/// The value is not trimmed: an explicitly sent string is kept as-is.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a partner URL slug.
///
/// ## Rules
/// - Lowercase ASCII letters, digits and hyphens only
/// - Not trimmed: `" shop"` is rejected rather than silently fixed
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_slug;
///
/// assert!(validate_slug("slug", "valid-slug-1").is_ok());
/// assert!(validate_slug("slug", "Invalid Slug!").is_err());
/// ```
pub fn validate_slug(field: &str, slug: &str) -> ValidationResult<()> {
    if !SLUG_PATTERN.is_match(slug) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only lowercase letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates an Indian postal PIN code (exactly six ASCII digits).
pub fn validate_pincode(field: &str, pincode: &str) -> ValidationResult<()> {
    if pincode.len() != PINCODE_LENGTH || !pincode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must be exactly {} digits", PINCODE_LENGTH),
        });
    }

    Ok(())
}

/// Validates an absolute URL (partner logo, cover image).
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_url;
///
/// assert!(validate_url("imageUrl", "https://cdn.example.com/logo.png").is_ok());
/// assert!(validate_url("imageUrl", "logo.png").is_err());
/// ```
pub fn validate_url(field: &str, value: &str) -> ValidationResult<url::Url> {
    url::Url::parse(value).map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("must be a valid URL ({})", e),
    })
}

/// Validates a UUID string format (partner IDs in routes).
pub fn validate_uuid(field: &str, id: &str) -> ValidationResult<uuid::Uuid> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid UUID".to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses an integer delivered as a query-string value.
///
/// Surrounding whitespace is ignored; anything else that is not a base-10
/// integer is a format error.
pub fn parse_integer(field: &str, raw: &str) -> ValidationResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be an integer".to_string(),
        })
}

/// Validates that an integer lies in `min..=max`.
pub fn validate_range(field: &str, value: i64, min: i64, max: i64) -> ValidationResult<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(())
}

/// Validates a non-negative integer (quantities, offsets).
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a non-negative amount (prices, fees).
///
/// Zero is allowed (free items, free delivery).
pub fn validate_non_negative_money(field: &str, amount: Money) -> ValidationResult<()> {
    validate_non_negative(field, amount.paise())
}

/// Validates a non-negative, finite measurement (hours, kilometres).
pub fn validate_non_negative_measure(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
