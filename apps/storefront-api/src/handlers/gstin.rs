//! GSTIN check used by the partner onboarding and B2B checkout forms.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bazaar_core::gstin::{check_gstin, Gstin};

use crate::error::ApiResult;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstinRequest {
    #[serde(default)]
    pub gstin: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GstinResponse {
    /// Normalized GSTIN, or `null` when none was supplied.
    pub gstin: Option<Gstin>,
    pub verified: bool,
}

/// `POST /api/gstin/validate`
///
/// A blank GSTIN is accepted as "not provided" and reported unverified.
pub async fn validate(
    State(state): State<SharedState>,
    payload: Result<Json<GstinRequest>, JsonRejection>,
) -> ApiResult<Json<GstinResponse>> {
    let Json(request) = payload?;
    let gstin = check_gstin(&request.gstin).map_err(bazaar_core::ValidationErrors::from)?;
    let verified = gstin
        .as_ref()
        .is_some_and(|g| state.registry.verify(g));

    debug!(gstin = ?gstin.as_ref().map(Gstin::as_str), verified, "GSTIN checked");
    Ok(Json(GstinResponse { gstin, verified }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::ApiConfig;
    use crate::error::ErrorCode;
    use crate::state::AppState;

    fn state() -> SharedState {
        Arc::new(AppState::new(ApiConfig::default()))
    }

    fn body(gstin: &str) -> Result<Json<GstinRequest>, JsonRejection> {
        Ok(Json(GstinRequest {
            gstin: gstin.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_valid_gstin_verified() {
        let Json(res) = validate(State(state()), body(" 22AAAAA0000A1Z5 ")).await.unwrap();
        assert_eq!(res.gstin.unwrap().as_str(), "22AAAAA0000A1Z5");
        assert!(res.verified);
    }

    #[tokio::test]
    async fn test_blank_gstin_not_verified() {
        let Json(res) = validate(State(state()), body("")).await.unwrap();
        assert!(res.gstin.is_none());
        assert!(!res.verified);
    }

    #[tokio::test]
    async fn test_invalid_gstin_rejected() {
        let err = validate(State(state()), body("INVALID")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields[0].field, "gstin");
    }
}
