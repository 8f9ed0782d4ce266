//! The dataset search state carried by the URL.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::dataset_filters::{FilterValue, to_filters_params, to_filters_value};
use crate::pager::{PAGE_PARAM, get_page_from_params, make_page_param};
use crate::query_string::{QueryParam, QueryParams, patch_query_string, to_query_string};
use crate::search_const::SEARCH_TEXT_PARAM;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSearchQuery {
    pub q: Option<String>,
    pub filters: FilterValue,
    pub page: u64,
}

impl Default for DatasetSearchQuery {
    fn default() -> Self {
        Self { q: None, filters: FilterValue::default(), page: 1 }
    }
}

impl DatasetSearchQuery {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            q: params.get(SEARCH_TEXT_PARAM).map(|q| q.to_string()),
            filters: to_filters_value(params),
            page: get_page_from_params(params),
        }
    }

    pub fn from_query_string(query: &str) -> Self {
        Self::from_params(&QueryParams::parse(query))
    }

    /// `q`, then the filters in canonical order, then `page` when past the first page.
    pub fn to_params(&self) -> Vec<QueryParam> {
        let mut params = vec![QueryParam::new(SEARCH_TEXT_PARAM, self.q.clone())];
        params.extend(to_filters_params(&self.filters));
        if self.page > 1 {
            params.push(make_page_param(self.page));
        }
        params
    }

    pub fn to_query_string(&self) -> String {
        to_query_string(&self.to_params())
    }

    /// New filters send the user back to the first page.
    pub fn with_filters(&self, filters: FilterValue) -> Self {
        Self { q: self.q.clone(), filters, page: 1 }
    }

    /// Empty text clears the search.
    pub fn with_search_text(&self, q: &str) -> Self {
        let q = q.trim();
        Self {
            q: (!q.is_empty()).then(|| q.to_string()),
            filters: self.filters.clone(),
            page: 1,
        }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self { page, ..self.clone() }
    }

    pub fn has_filters(&self) -> bool {
        self.filters.iter().any(|(_, value)| value.is_some())
    }

    /// Parameters for the backend search request.
    pub fn to_request_params(&self, page_size: u64) -> Vec<QueryParam> {
        let mut params = vec![QueryParam::new(SEARCH_TEXT_PARAM, self.q.clone())];
        params.extend(to_filters_params(&self.filters));
        params.push(QueryParam::set("page_number", self.page.to_string()));
        params.push(QueryParam::set("page_size", page_size.to_string()));
        params
    }
}

/// Link to `page` that keeps every other parameter of `existing` untouched.
pub fn page_link(existing: &QueryParams, page: u64) -> String {
    let item = if page > 1 { make_page_param(page) } else { QueryParam::unset(PAGE_PARAM) };
    patch_query_string(existing, &[item])
}

// Without the leading `?`, as the router adds it.
impl Display for DatasetSearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let query = self.to_query_string();
        write!(f, "{}", query.strip_prefix('?').unwrap_or(&query))
    }
}

impl From<&str> for DatasetSearchQuery {
    fn from(query: &str) -> Self {
        Self::from_query_string(query)
    }
}
