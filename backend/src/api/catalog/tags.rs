use common::tag::Tag;

use crate::{config::CatalogApiConfig, http_utils::catalog_client::catalog_get_json};

pub async fn get_tags(config: &CatalogApiConfig) -> anyhow::Result<Vec<Tag>> {
    catalog_get_json::<Vec<Tag>>(config, "/tags/", "").await
}
