use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use bazaar_core::sla::{format_delivery_time, format_prep_time};
use bazaar_core::validation::validate_non_negative_measure;
use bazaar_core::ValidationErrors;

use crate::error::ApiResult;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaParams {
    pub prep_hours: Option<f64>,
    pub min_mins: Option<u32>,
    pub max_mins: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
}

/// `GET /api/sla?prepHours=0.5&minMins=20&maxMins=30`
///
/// Each display string is produced only when its inputs are present; a
/// delivery window needs both bounds.
pub async fn sla(
    query: Result<Query<SlaParams>, QueryRejection>,
) -> ApiResult<Json<SlaResponse>> {
    let Query(params) = query?;
    let prep_time = match params.prep_hours {
        Some(hours) => {
            validate_non_negative_measure("prepHours", hours).map_err(ValidationErrors::from)?;
            Some(format_prep_time(hours))
        }
        None => None,
    };

    let delivery_time = match (params.min_mins, params.max_mins) {
        (Some(min), Some(max)) => Some(format_delivery_time(min, max)),
        _ => None,
    };

    Ok(Json(SlaResponse {
        prep_time,
        delivery_time,
    }))
}
