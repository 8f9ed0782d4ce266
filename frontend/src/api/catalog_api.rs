//! Server functions for the dataset catalog.

use common::{search_query::DatasetSearchQuery, search_result::DatasetSearchResults};
use dioxus::prelude::*;


#[server]
pub async fn load_dataset_search(query: DatasetSearchQuery) -> Result<DatasetSearchResults, ServerFnError> {
    use anyhow::Context;

    let config = backend::config::CatalogApiConfig::from_env();
    let x = backend::api::catalog::load_dataset_search(&config, query)
        .await
        .context("dataset search failed");
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}
