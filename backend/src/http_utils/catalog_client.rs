//! JSON GET requests against the catalog API.

use serde::de::DeserializeOwned;

use crate::config::CatalogApiConfig;


pub fn get_http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// `path` is relative to the API base url; `query_string` is either empty or starts with `?`.
pub fn build_url(config: &CatalogApiConfig, path: &str, query_string: &str) -> String {
    let query_string = if query_string == "?" { "" } else { query_string };
    format!("{}/{}{}", config.base_url, path.trim_start_matches('/'), query_string)
}

pub async fn catalog_get_json<T: DeserializeOwned>(
    config: &CatalogApiConfig,
    path: &str,
    query_string: &str,
) -> anyhow::Result<T> {
    let url = build_url(config, path, query_string);
    let t0 = std::time::Instant::now();
    tracing::debug!(%url, "catalog request");

    let mut request = get_http_client().get(&url);
    if let Some(token) = &config.api_token {
        request = request.bearer_auth(token);
    }
    let response = request.send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(%url, %status, "catalog request failed");
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis() as u64;
    tracing::info!(%url, len = response_txt.len(), dt_ms, "catalog response");

    let parsed: T = serde_json::from_str(&response_txt)?;
    Ok(parsed)
}
