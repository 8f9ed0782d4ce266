//! Paginated dataset search.

use common::{dataset::DatasetSummary, pagination::{Page, Paginated}, query_string::to_query_string, search_const::PAGE_SIZE, search_query::DatasetSearchQuery};

use crate::{config::CatalogApiConfig, http_utils::catalog_client::catalog_get_json};

const DATASETS_PATH: &str = "/datasets/";

/// Validates the page before building the request query string.
fn request_query_string(query: &DatasetSearchQuery) -> anyhow::Result<String> {
    let page = Page::new(query.page, PAGE_SIZE)?;
    Ok(to_query_string(&query.to_request_params(page.size())))
}

pub async fn search_datasets(config: &CatalogApiConfig, query: &DatasetSearchQuery) -> anyhow::Result<Paginated<DatasetSummary>> {
    let query_string = request_query_string(query)?;
    catalog_get_json::<Paginated<DatasetSummary>>(config, DATASETS_PATH, &query_string).await
}
