//! Explain output
//!
//! Shows the exact store request a list call would issue, without issuing it.

use serde::Serialize;

use crate::model::SortDirection;
use crate::store::{RenderedQuery, StoreQuery};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainPlan {
    /// Store request, DynamoDB wire shape
    pub query: RenderedQuery,
    /// True when the by-board index serves the query
    pub index_selected: bool,
    /// Requested sort field, recorded only; order follows the access path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    pub direction: SortDirection,
    /// Normalized page-local search term, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl ExplainPlan {
    pub fn from_query(
        query: &StoreQuery,
        direction: SortDirection,
        sort_field: Option<&str>,
        search_term: Option<String>,
    ) -> Self {
        Self {
            query: query.render(),
            index_selected: query.index_name.is_some(),
            sort_field: sort_field.map(str::to_string),
            direction,
            search_term,
        }
    }

    /// Pretty JSON for terminals
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
