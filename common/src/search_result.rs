//! Everything the dataset search page needs for one render.

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetSummary;
use crate::dataset_filters::FilterInfo;
use crate::pagination::Paginated;
use crate::query_string::QueryParams;
use crate::search_query::{DatasetSearchQuery, page_link};
use crate::tag::Tag;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSearchResults {
    pub query: DatasetSearchQuery,
    pub filter_info: FilterInfo,
    pub tags: Vec<Tag>,
    pub results: Paginated<DatasetSummary>,
}

impl DatasetSearchResults {
    /// At least one page, so the pager always has something to show.
    pub fn total_pages(&self) -> u64 {
        self.results.total_pages.max(1)
    }

    /// Where to send a query whose page is past the last one, keeping the rest of the query.
    pub fn stale_page_redirect(&self) -> Option<DatasetSearchQuery> {
        let total_pages = self.total_pages();
        if self.query.page <= total_pages {
            return None;
        }
        let existing = QueryParams::parse(&self.query.to_query_string());
        Some(DatasetSearchQuery::from_query_string(&page_link(&existing, total_pages)))
    }
}
