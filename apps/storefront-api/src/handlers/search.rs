use std::collections::HashMap;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use tracing::debug;

use bazaar_core::search::{parse_search_query, SearchQuery};

use crate::error::ApiResult;

/// `GET /api/search`
///
/// Returns the normalized query the search backend should run.
pub async fn search(
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<SearchQuery>> {
    let Query(params) = params?;
    let query = parse_search_query(&params)?;
    debug!(
        search_type = %query.search_type,
        limit = query.limit,
        offset = query.offset,
        filtered = query.has_filters(),
        "Search query accepted"
    );
    Ok(Json(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::search::SearchType;

    fn params(pairs: &[(&str, &str)]) -> Result<Query<HashMap<String, String>>, QueryRejection> {
        Ok(Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[tokio::test]
    async fn test_defaults_applied() {
        let Json(query) = search(params(&[])).await.unwrap();
        assert_eq!(query, SearchQuery::default());
    }

    #[tokio::test]
    async fn test_filters_passed_through() {
        let Json(query) = search(params(&[("type", "partners"), ("city", "Pune"), ("limit", "5")]))
            .await
            .unwrap();
        assert_eq!(query.search_type, SearchType::Partners);
        assert_eq!(query.city.as_deref(), Some("Pune"));
        assert_eq!(query.limit, 5);
    }

    #[tokio::test]
    async fn test_all_errors_reported() {
        let err = search(params(&[("limit", "500"), ("type", "shops"), ("offset", "-1")]))
            .await
            .unwrap_err();
        assert_eq!(err.fields.len(), 3);
    }
}
