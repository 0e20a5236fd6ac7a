//! # Search Query Schema
//!
//! Turns the raw query-string map delivered by the router into a bounded
//! [`SearchQuery`].
//!
//! ## Defaults
//! ```text
//! ┌───────────┬──────────────────────┬──────────────────────────────────────┐
//! │ key       │ when absent          │ bounds when present                  │
//! ├───────────┼──────────────────────┼──────────────────────────────────────┤
//! │ q         │ None                 │ ≤ 200 characters                     │
//! │ type      │ all                  │ all | partners | items               │
//! │ category  │ None                 │ ≤ 100 characters                     │
//! │ tag       │ None                 │ ≤ 100 characters                     │
//! │ city      │ None                 │ ≤ 100 characters                     │
//! │ limit     │ 20                   │ integer 1..=100                      │
//! │ offset    │ 0                    │ integer ≥ 0                          │
//! └───────────┴──────────────────────┴──────────────────────────────────────┘
//! ```
//!
//! Defaults apply only to absent keys. `?q=` is a deliberately cleared query
//! and stays `Some("")`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationErrors};
use crate::validation::{parse_integer, validate_max_len, validate_non_negative, validate_range};
use crate::{DEFAULT_SEARCH_LIMIT, MAX_FILTER_LEN, MAX_QUERY_LEN, MAX_SEARCH_LIMIT};

// =============================================================================
// Search Type
// =============================================================================

/// Which result groups a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    All,
    Partners,
    Items,
}

impl SearchType {
    pub const ALLOWED: [&'static str; 3] = ["all", "partners", "items"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::All => "all",
            SearchType::Partners => "partners",
            SearchType::Items => "items",
        }
    }
}

impl FromStr for SearchType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchType::All),
            "partners" => Ok(SearchType::Partners),
            "items" => Ok(SearchType::Items),
            _ => Err(ValidationError::NotAllowed {
                field: "type".to_string(),
                allowed: SearchType::ALLOWED.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Search Query
// =============================================================================

/// A validated, bounded search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub city: Option<String>,
    pub limit: u32,
    pub offset: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            q: None,
            search_type: SearchType::All,
            category: None,
            tag: None,
            city: None,
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
        }
    }
}

impl SearchQuery {
    /// Whether the query narrows results at all beyond pagination.
    pub fn has_filters(&self) -> bool {
        self.q.as_deref().is_some_and(|q| !q.is_empty())
            || self.category.is_some()
            || self.tag.is_some()
            || self.city.is_some()
    }
}

/// Parses raw query-string parameters into a [`SearchQuery`].
///
/// Every failing field is reported; unknown keys are ignored.
///
/// ## Example
/// ```rust
/// use std::collections::HashMap;
/// use bazaar_core::search::{parse_search_query, SearchType};
///
/// let query = parse_search_query(&HashMap::new()).unwrap();
/// assert_eq!(query.search_type, SearchType::All);
/// assert_eq!((query.limit, query.offset), (20, 0));
///
/// let raw = HashMap::from([("limit".to_string(), "500".to_string())]);
/// assert!(parse_search_query(&raw).is_err());
/// ```
pub fn parse_search_query(raw: &HashMap<String, String>) -> Result<SearchQuery, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut query = SearchQuery::default();

    query.q = text_param(raw, "q", MAX_QUERY_LEN, &mut errors);
    query.category = text_param(raw, "category", MAX_FILTER_LEN, &mut errors);
    query.tag = text_param(raw, "tag", MAX_FILTER_LEN, &mut errors);
    query.city = text_param(raw, "city", MAX_FILTER_LEN, &mut errors);

    if let Some(value) = raw.get("type") {
        if let Some(search_type) = errors.collect(value.parse::<SearchType>()) {
            query.search_type = search_type;
        }
    }

    if let Some(value) = raw.get("limit") {
        let limit = parse_integer("limit", value).and_then(|limit| {
            validate_range("limit", limit, 1, MAX_SEARCH_LIMIT as i64).map(|_| limit as u32)
        });
        if let Some(limit) = errors.collect(limit) {
            query.limit = limit;
        }
    }

    if let Some(value) = raw.get("offset") {
        let offset = parse_integer("offset", value)
            .and_then(|offset| validate_non_negative("offset", offset).map(|_| offset as u64));
        if let Some(offset) = errors.collect(offset) {
            query.offset = offset;
        }
    }

    errors.into_result(query)
}

/// Reads an optional free-text parameter, enforcing its length bound.
fn text_param(
    raw: &HashMap<String, String>,
    key: &str,
    max: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let value = raw.get(key)?;
    errors.collect(validate_max_len(key, value, max))?;
    Some(value.clone())
}

// =============================================================================
// Unit Tests
// =============================================================================
