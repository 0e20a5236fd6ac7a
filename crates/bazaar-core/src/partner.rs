//! # Partner Schemas
//!
//! Validation for the partner onboarding form and the partner settings
//! sheet.
//!
//! ## Registration vs Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Onboarding form ──► PartnerRegistrationInput ──► validate_registration │
//! │                       (all fields required)        │                    │
//! │                                                    ▼                    │
//! │                                          PartnerRegistration            │
//! │                                                                         │
//! │  Settings sheet  ──► PartnerUpdateInput ──────► validate_update         │
//! │                       (every field optional,       │                    │
//! │                        some may be cleared)        ▼                    │
//! │                                               PartnerUpdate             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both schemas validate every field before returning, so the form can mark
//! all problems at once.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationErrors};
use crate::money::Money;
use crate::validation::{
    validate_min_len, validate_non_negative_measure, validate_non_negative_money,
    validate_pincode, validate_slug, validate_url,
};
use crate::MIN_PARTNER_FIELD_LEN;

// =============================================================================
// Patch (tri-state field)
// =============================================================================

/// A field in a partial update.
///
/// JSON distinguishes a key that was left out from a key sent as `null`:
/// the first keeps the stored value, the second clears it. Use with
/// `#[serde(default)]` so missing keys become [`Patch::Absent`].
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    /// Key not sent; keep the stored value.
    Absent,
    /// Key sent as `null`; clear the stored value.
    Null,
    /// Key sent with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

/// Absent fields must be skipped with `skip_serializing_if = "Patch::is_absent"`.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(value) => serializer.serialize_some(value),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}

// =============================================================================
// Registration
// =============================================================================

/// Raw onboarding form body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRegistrationInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

/// A validated partner registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRegistration {
    pub name: String,
    pub slug: String,
    pub city: String,
    pub pincode: String,
}

/// Validates an onboarding submission.
///
/// ## Rules
/// - `name`, `city`: required, at least 2 characters after trimming
/// - `slug`: required, at least 2 characters, `^[a-z0-9-]+$`
/// - `pincode`: required, exactly 6 digits
///
/// ## Example
/// ```rust
/// use bazaar_core::partner::{validate_registration, PartnerRegistrationInput};
///
/// let input = PartnerRegistrationInput {
///     name: Some("Fresh Mart".into()),
///     slug: Some("fresh-mart".into()),
///     city: Some("Pune".into()),
///     pincode: Some("411001".into()),
/// };
/// assert!(validate_registration(&input).is_ok());
/// ```
pub fn validate_registration(
    input: &PartnerRegistrationInput,
) -> Result<PartnerRegistration, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = required(&input.name, "name", &mut errors)
        .and_then(|n| errors.collect(validate_min_len("name", n, MIN_PARTNER_FIELD_LEN)));

    let slug = required(&input.slug, "slug", &mut errors).and_then(|s| {
        errors.collect(
            validate_min_len("slug", s, MIN_PARTNER_FIELD_LEN)
                .and_then(|_| validate_slug("slug", s))
                .map(|_| s.to_string()),
        )
    });

    let city = required(&input.city, "city", &mut errors)
        .and_then(|c| errors.collect(validate_min_len("city", c, MIN_PARTNER_FIELD_LEN)));

    let pincode = required(&input.pincode, "pincode", &mut errors).and_then(|p| {
        errors.collect(validate_pincode("pincode", p).map(|_| p.to_string()))
    });

    match (name, slug, city, pincode) {
        (Some(name), Some(slug), Some(city), Some(pincode)) if errors.is_empty() => {
            Ok(PartnerRegistration {
                name,
                slug,
                city,
                pincode,
            })
        }
        _ => Err(errors),
    }
}

fn required<'a>(
    value: &'a Option<String>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match value {
        Some(v) => Some(v.as_str()),
        None => {
            errors.push(ValidationError::Required {
                field: field.to_string(),
            });
            None
        }
    }
}

// =============================================================================
// Update
// =============================================================================

/// Raw settings-sheet body. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerUpdateInput {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub image_url: Patch<String>,
    #[serde(default)]
    pub is_online: Patch<bool>,
    #[serde(default)]
    pub prep_hours: Patch<f64>,
    #[serde(default)]
    pub delivery_fee: Patch<Money>,
    #[serde(default)]
    pub city: Patch<String>,
}

/// A validated partial update.
///
/// `name` and `is_online` cannot be cleared, so they are plain options.
/// The remaining fields keep the absent/null/value distinction.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub image_url: Patch<url::Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub prep_hours: Patch<f64>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub delivery_fee: Patch<Money>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub city: Patch<String>,
}

impl PartnerUpdate {
    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image_url.is_absent()
            && self.is_online.is_none()
            && self.prep_hours.is_absent()
            && self.delivery_fee.is_absent()
            && self.city.is_absent()
    }
}

/// Validates a settings-sheet submission.
///
/// ## Rules
/// - `name`: at least 2 characters; cannot be null
/// - `imageUrl`: absolute URL or null
/// - `isOnline`: boolean; cannot be null
/// - `prepHours`: ≥ 0 or null
/// - `deliveryFee`: ≥ 0 paise or null
/// - `city`: at least 2 characters or null
///
/// ## Example
/// ```rust
/// use bazaar_core::partner::{validate_update, Patch, PartnerUpdateInput};
///
/// let input = PartnerUpdateInput {
///     prep_hours: Patch::Value(-1.0),
///     ..PartnerUpdateInput::default()
/// };
/// assert!(validate_update(&input).is_err());
/// ```
pub fn validate_update(input: &PartnerUpdateInput) -> Result<PartnerUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut update = PartnerUpdate::default();

    match &input.name {
        Patch::Absent => {}
        Patch::Null => errors.push(not_nullable("name")),
        Patch::Value(name) => {
            update.name = errors.collect(validate_min_len("name", name, MIN_PARTNER_FIELD_LEN));
        }
    }

    match &input.image_url {
        Patch::Absent => {}
        Patch::Null => update.image_url = Patch::Null,
        Patch::Value(raw) => {
            if let Some(url) = errors.collect(validate_url("imageUrl", raw)) {
                update.image_url = Patch::Value(url);
            }
        }
    }

    match &input.is_online {
        Patch::Absent => {}
        Patch::Null => errors.push(not_nullable("isOnline")),
        Patch::Value(online) => update.is_online = Some(*online),
    }

    match &input.prep_hours {
        Patch::Absent => {}
        Patch::Null => update.prep_hours = Patch::Null,
        Patch::Value(hours) => {
            if errors
                .collect(validate_non_negative_measure("prepHours", *hours))
                .is_some()
            {
                update.prep_hours = Patch::Value(*hours);
            }
        }
    }

    match &input.delivery_fee {
        Patch::Absent => {}
        Patch::Null => update.delivery_fee = Patch::Null,
        Patch::Value(fee) => {
            if errors
                .collect(validate_non_negative_money("deliveryFee", *fee))
                .is_some()
            {
                update.delivery_fee = Patch::Value(*fee);
            }
        }
    }

    match &input.city {
        Patch::Absent => {}
        Patch::Null => update.city = Patch::Null,
        Patch::Value(city) => {
            if let Some(city) =
                errors.collect(validate_min_len("city", city, MIN_PARTNER_FIELD_LEN))
            {
                update.city = Patch::Value(city);
            }
        }
    }

    errors.into_result(update)
}

fn not_nullable(field: &str) -> ValidationError {
    ValidationError::NotNullable {
        field: field.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
