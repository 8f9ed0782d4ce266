//! Shared search and pagination constants.

/// Datasets per result page.
pub const PAGE_SIZE: u64 = 10;

/// Page links shown on each side of the current page.
pub const DEFAULT_NUM_SIBLINGS: u64 = 2;

pub const MAX_PAGE_NUMBER: u64 = 10_000;
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Free-text search parameter.
pub const SEARCH_TEXT_PARAM: &str = "q";
