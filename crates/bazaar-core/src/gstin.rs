//! # GSTIN Module
//!
//! Syntax checks for the Goods and Services Tax Identification Number that
//! B2B customers and partners may attach to an order or profile.
//!
//! ## Structure
//! ```text
//!   2 2 A A A A A 0 0 0 0 A 1 Z 5
//!   └┬┘ └───┬───┘ └──┬──┘ │ │ │ │
//!    │      │        │    │ │ │ └── check character   [0-9A-Z]
//!    │      │        │    │ │ └──── literal 'Z'
//!    │      │        │    │ └────── entity number      [1-9A-Z]
//!    │      │        │    └──────── PAN check letter   [A-Z]
//!    │      │        └───────────── PAN digits         [0-9]{4}
//!    │      └────────────────────── PAN letters        [A-Z]{5}
//!    └───────────────────────────── state code         [0-9]{2}
//! ```
//!
//! Validity is purely syntactic. The check character is not recomputed and
//! the GST registry is not consulted.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::GSTIN_LENGTH;

static GSTIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("invalid GSTIN pattern")
});

const FIELD: &str = "gstin";

/// Returns true iff `input` is a syntactically valid GSTIN.
///
/// The input is NOT trimmed; use [`check_gstin`] for raw form input.
///
/// ## Example
/// ```rust
/// use bazaar_core::gstin::validate_gstin;
///
/// assert!(validate_gstin("22AAAAA0000A1Z5"));
/// assert!(!validate_gstin("INVALID"));
/// assert!(!validate_gstin(""));
/// ```
pub fn validate_gstin(input: &str) -> bool {
    GSTIN_PATTERN.is_match(input)
}

/// A syntactically valid GSTIN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct Gstin(String);

impl Gstin {
    /// Parses an untrimmed GSTIN, reporting length before format.
    pub fn parse(input: &str) -> Result<Gstin, ValidationError> {
        let actual = input.chars().count();
        if actual != GSTIN_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: FIELD.to_string(),
                expected: GSTIN_LENGTH,
                actual,
            });
        }

        if !validate_gstin(input) {
            return Err(ValidationError::InvalidFormat {
                field: FIELD.to_string(),
                reason: "must look like 22AAAAA0000A1Z5".to_string(),
            });
        }

        Ok(Gstin(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit state code prefix (e.g. "29" for Karnataka).
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// The embedded PAN (characters 3-12).
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks a GSTIN submitted through a form.
///
/// ## Rules
/// - Whitespace is trimmed
/// - Empty means "not provided" and is valid (GSTIN is optional for B2C)
/// - Wrong length fails with a length error before the pattern runs
/// - Pattern mismatch fails with a format error
///
/// ## Example
/// ```rust
/// use bazaar_core::gstin::check_gstin;
///
/// assert_eq!(check_gstin("   ").unwrap(), None);
/// assert!(check_gstin(" 22AAAAA0000A1Z5 ").unwrap().is_some());
/// assert!(check_gstin("22AAAAA").is_err());
/// ```
pub fn check_gstin(input: &str) -> Result<Option<Gstin>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Gstin::parse(trimmed).map(Some)
}

// =============================================================================
// Registry Verification
// =============================================================================

/// Verifies a GSTIN against the government registry.
///
/// Only the syntactic implementation exists today; the trait is the seam a
/// GST network client plugs into.
pub trait GstinRegistry {
    /// Returns whether the registry knows `gstin` as an active registration.
    fn verify(&self, gstin: &Gstin) -> bool;
}

/// Registry stand-in that accepts every syntactically valid GSTIN.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntacticRegistry;

impl GstinRegistry for SyntacticRegistry {
    fn verify(&self, _gstin: &Gstin) -> bool {
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
