use common::dataset_filters::FilterInfo;

use crate::{config::CatalogApiConfig, http_utils::catalog_client::catalog_get_json};

/// Every filter value currently present in the catalog.
pub async fn get_dataset_filters_info(config: &CatalogApiConfig) -> anyhow::Result<FilterInfo> {
    catalog_get_json::<FilterInfo>(config, "/datasets/filters/", "").await
}
