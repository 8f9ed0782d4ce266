//! Catalog entry summaries as listed in search results.

use serde::{Deserialize, Serialize};

use crate::labels::{data_format_short_name, value_label};
use crate::filter_key::FilterKey;
use crate::tag::Tag;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub service: String,
    #[serde(default)]
    pub formats: Vec<String>,
    pub geographical_coverage: String,
    #[serde(default)]
    pub technical_source: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl DatasetSummary {
    pub fn geographical_coverage_label(&self) -> String {
        value_label(FilterKey::GeographicalCoverage, &self.geographical_coverage)
    }

    /// Short format badges, unknown formats shown as-is.
    pub fn format_badges(&self) -> Vec<String> {
        self.formats
            .iter()
            .map(|format| data_format_short_name(format).map(|s| s.to_string()).unwrap_or_else(|| format.clone()))
            .collect()
    }
}
