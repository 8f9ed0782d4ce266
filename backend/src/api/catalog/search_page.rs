//! Loads filter info, tags and results for one search page in parallel.

use common::{search_query::DatasetSearchQuery, search_result::DatasetSearchResults};

use crate::config::CatalogApiConfig;

use super::{get_dataset_filters_info, get_tags, search_datasets};

pub async fn load_dataset_search(config: &CatalogApiConfig, query: DatasetSearchQuery) -> anyhow::Result<DatasetSearchResults> {
    let (filter_info, tags, results) = tokio::try_join!(
        get_dataset_filters_info(config),
        get_tags(config),
        search_datasets(config, &query),
    )?;
    tracing::debug!(total_items = results.total_items, total_pages = results.total_pages, "dataset search loaded");
    Ok(DatasetSearchResults { query, filter_info, tags, results })
}
