//! Dataset catalog search state shared between frontend and backend.
//!
//! Keeps the selected filters, the URL query string, the backend request
//! parameters and the visible page window consistent with each other.
//! Everything here is a pure transform; callers own the state.

extern crate serde;


pub mod query_string;
pub mod filter_key;
pub mod labels;
pub mod tag;
pub mod dataset_filters;
pub mod search_filter;
pub mod pager;
pub mod pagination;
pub mod dataset;
pub mod search_query;
pub mod search_result;
pub mod search_const;
