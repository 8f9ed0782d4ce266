//! Catalog API connection settings, read from the environment.

const DEFAULT_CATALOG_API_URL: &str = "http://127.0.0.1:3579/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogApiConfig {
    pub base_url: String,
    pub api_token: Option<String>,
}

impl CatalogApiConfig {
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string(), api_token }
    }

    /// `CATALOG_API_URL` (defaults to a local API) and optional `CATALOG_API_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = get("CATALOG_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_CATALOG_API_URL.to_string());
        let api_token = get("CATALOG_API_TOKEN").filter(|token| !token.is_empty());
        Self::new(base_url, api_token)
    }
}
