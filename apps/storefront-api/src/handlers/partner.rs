//! # Partner Handlers
//!
//! Onboarding and settings-sheet submissions. Storage lives in the hosted
//! backend, so both handlers answer with the validated payload the frontend
//! should persist.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use bazaar_core::partner::{
    validate_registration, validate_update, PartnerRegistration, PartnerRegistrationInput,
    PartnerUpdate, PartnerUpdateInput,
};
use bazaar_core::validation::validate_uuid;
use bazaar_core::ValidationErrors;

use crate::error::ApiResult;

/// `POST /api/partners`
pub async fn register(
    payload: Result<Json<PartnerRegistrationInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PartnerRegistration>)> {
    let Json(input) = payload?;
    let partner = validate_registration(&input)?;
    info!(slug = %partner.slug, city = %partner.city, "Partner registration accepted");
    Ok((StatusCode::CREATED, Json(partner)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerUpdateResponse {
    pub id: Uuid,
    pub update: PartnerUpdate,
}

/// `PATCH /api/partners/{id}`
///
/// The route ID and the body are validated together so one response lists
/// every problem.
pub async fn update(
    Path(id): Path<String>,
    payload: Result<Json<PartnerUpdateInput>, JsonRejection>,
) -> ApiResult<Json<PartnerUpdateResponse>> {
    let Json(input) = payload?;
    let mut errors = ValidationErrors::new();
    let id = errors.collect(validate_uuid("id", &id));
    let update = match validate_update(&input) {
        Ok(update) => Some(update),
        Err(body_errors) => {
            body_errors.into_iter().for_each(|e| errors.push(e));
            None
        }
    };

    match (id, update) {
        (Some(id), Some(update)) => {
            debug!(%id, empty = update.is_empty(), "Partner update accepted");
            Ok(Json(PartnerUpdateResponse { id, update }))
        }
        _ => Err(errors.into()),
    }
}
