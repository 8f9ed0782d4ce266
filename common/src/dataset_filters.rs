//! Conversions between filter selections, query parameters and filter options.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::filter_key::{FilterKey, FilterMap};
use crate::labels::{ALL_VALUES_SENTINEL, value_label};
use crate::query_string::{QueryParam, QueryParams};
use crate::tag::Tag;


/// At most one selected value per filter key.
pub type FilterValue = FilterMap<Option<String>>;

/// Selectable options per filter key, in backend order.
pub type FilterOptions = FilterMap<Vec<FilterOption>>;

/// Every value that currently exists in the catalog, per filter key.
///
/// Field names match the backend's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterInfo {
    pub geographical_coverage: Vec<String>,
    pub service: Vec<String>,
    pub format: Vec<String>,
    pub technical_source: Vec<String>,
    pub tag_id: Vec<Tag>,
    pub license: Vec<String>,
}

/// `label` is display only; `value` is what goes into the query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

impl From<&Tag> for FilterOption {
    fn from(tag: &Tag) -> Self {
        Self::new(tag.name.clone(), tag.id.clone())
    }
}

/// Read the selection for every known key. Unknown keys are ignored, stale values pass through.
pub fn to_filters_value(params: &QueryParams) -> FilterValue {
    FilterMap::from_fn(|key| params.get(key.param_name()).map(|v| v.to_string()))
}

/// One pair per filter key, in canonical key order, unset keys included.
pub fn to_filters_params(value: &FilterValue) -> Vec<QueryParam> {
    value
        .iter()
        .map(|(key, v)| QueryParam::new(key.param_name(), v.clone()))
        .collect()
}

pub fn to_filters_options(info: &FilterInfo) -> FilterOptions {
    let plain = |key: FilterKey, values: &[String]| {
        values
            .iter()
            .map(|value| FilterOption::new(value_label(key, value), value.clone()))
            .collect::<Vec<_>>()
    };
    FilterOptions {
        geographical_coverage: plain(FilterKey::GeographicalCoverage, &info.geographical_coverage),
        service: plain(FilterKey::Service, &info.service),
        format: plain(FilterKey::Format, &info.format),
        technical_source: plain(FilterKey::TechnicalSource, &info.technical_source),
        tag_id: info.tag_id.iter().map(FilterOption::from).collect(),
        license: plain(FilterKey::License, &info.license),
    }
}

/// Short text for each filter button; `None` where nothing is selected.
///
/// Tag ids resolve through `tag_names`, falling back to the id itself.
pub fn to_filters_button_texts(value: &FilterValue, tag_names: &HashMap<String, String>) -> FilterMap<Option<String>> {
    value.map(|key, selected| {
        let selected = selected.as_deref()?;
        if key == FilterKey::TagId {
            return match tag_names.get(selected) {
                Some(name) => Some(name.clone()),
                None => {
                    tracing::debug!(tag_id = selected, "no name known for selected tag");
                    Some(selected.to_string())
                }
            };
        }
        Some(value_label(key, selected))
    })
}

/// Options listed under a filter control, after its own "all values" entry.
///
/// The sentinel option is left out as the control already offers it. A selected
/// value missing from `options` is appended so it stays visible.
pub fn to_select_entries(options: &[FilterOption], selected: Option<&FilterOption>) -> Vec<FilterOption> {
    let mut entries = options
        .iter()
        .filter(|option| option.value != ALL_VALUES_SENTINEL)
        .cloned()
        .collect::<Vec<_>>();
    if let Some(selected) = selected
        && selected.value != ALL_VALUES_SENTINEL
        && !entries.iter().any(|entry| entry.value == selected.value)
    {
        entries.push(selected.clone());
    }
    entries
}

/// The sentinel selects nothing.
pub fn is_all_values(selected: Option<&str>) -> bool {
    selected.is_none_or(|value| value == ALL_VALUES_SENTINEL)
}
