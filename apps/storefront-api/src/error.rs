//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront API                     │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<Json<T>, ApiError>                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Body mistyped?   ── JsonRejection ─────────────┐                      │
//! │         │                                       │                      │
//! │         ▼                                       │                      │
//! │  Schema rejected? ── ValidationErrors ──────────┤                      │
//! │         │                                       │                      │
//! │         ▼                                       ▼                      │
//! │  Pricing failed?  ── CoreError ─────────────► ApiError ──► 422 JSON    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ─────────────────────────────────────────────────► 200 JSON   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The web frontend receives:
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "slug must be at least 2 characters",
//!   "fields": [{ "field": "slug", "kind": "format", "message": "..." }]
//! }
//! ```

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use bazaar_core::{CoreError, FieldError, ValidationError, ValidationErrors};

/// API error returned from handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field failures, for inline form messages
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (422)
    ValidationError,

    /// Input was well-formed but cannot be processed (422)
    BusinessLogic,

    /// Body is not JSON, or has the wrong content type (400)
    MalformedRequest,

    /// Internal server error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::ValidationError | ErrorCode::BusinessLogic => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ErrorCode::MalformedRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts a batch of field failures to a validation error.
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: errors.to_string(),
            fields: errors.to_field_errors(),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => errors.into(),
            CoreError::AmountOverflow { context } => ApiError::new(
                ErrorCode::BusinessLogic,
                format!("Order amount is too large ({})", context),
            ),
            CoreError::InvalidConfig { reason } => {
                // Config is validated at startup, so reaching this is a bug
                tracing::error!("Pricing configuration invalid at request time: {}", reason);
                ApiError::internal("Pricing is unavailable")
            }
        }
    }
}

/// Converts a JSON body rejection.
///
/// Wrong-typed and missing fields become field errors; syntax and
/// content-type problems stay request-level.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => deserialize_error(&rejection.body_text()),
            _ => ApiError::new(ErrorCode::MalformedRequest, rejection.body_text()),
        }
    }
}

/// Converts a query-string rejection.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        deserialize_error(&rejection.body_text())
    }
}

/// Maps a serde message to a field error when it names the field.
///
/// Messages look like `"...: pincode: invalid type: integer ..."` or
/// `"...: missing field `name` at line 1 column 2"`.
fn deserialize_error(text: &str) -> ApiError {
    let detail = text
        .split_once("target type: ")
        .or_else(|| text.split_once("query string: "));
    let Some((_, detail)) = detail else {
        return ApiError::new(ErrorCode::ValidationError, text);
    };

    let error = if let Some(rest) = detail.strip_prefix("missing field `") {
        rest.split('`').next().map(|field| ValidationError::Required {
            field: field.to_string(),
        })
    } else {
        detail
            .split_once(": ")
            .filter(|(path, _)| !path.is_empty() && !path.contains(char::is_whitespace))
            .map(|(path, reason)| ValidationError::InvalidFormat {
                field: path.to_string(),
                reason: strip_position(reason).to_string(),
            })
    };

    match error {
        Some(error) => ValidationErrors::from(error).into(),
        None => ApiError::new(ErrorCode::ValidationError, text),
    }
}

fn strip_position(reason: &str) -> &str {
    reason
        .rsplit_once(" at line ")
        .map_or(reason, |(head, _)| head)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = ?self.code, message = %self.message, "Request failed");
        } else {
            tracing::warn!(code = ?self.code, message = %self.message, "Request rejected");
        }
        (status, Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;
