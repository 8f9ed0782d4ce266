//! Selected filter options: merging, cleaning and grouping for display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset_filters::{FilterOption, FilterValue};
use crate::filter_key::{FilterKey, FilterMap};
use crate::labels::value_label;


/// Options picked per filter key. Possibly partial.
///
/// A missing key was never mentioned, `None` is an explicit unset,
/// and `Some(vec![])` is a cleared selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectableFilter(pub BTreeMap<FilterKey, Option<Vec<FilterOption>>>);

impl SelectableFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A full filter where each key holds the option matching the current selection.
    ///
    /// Keys with no selection hold `None`. A selected value with no matching
    /// option is kept as-is, labelled by itself.
    pub fn from_selection(value: &FilterValue, options: &FilterMap<Vec<FilterOption>>) -> Self {
        let entries = FilterKey::ALL.into_iter().map(|key| {
            let picked = value.get(key).as_deref().map(|selected| {
                options
                    .get(key)
                    .iter()
                    .find(|option| option.value == selected)
                    .cloned()
                    .unwrap_or_else(|| FilterOption::new(value_label(key, selected), selected))
            });
            (key, picked.map(|option| vec![option]))
        });
        Self(entries.collect())
    }

    pub fn with(mut self, key: FilterKey, selection: Option<Vec<FilterOption>>) -> Self {
        self.0.insert(key, selection);
        self
    }

    pub fn get(&self, key: FilterKey) -> Option<&[FilterOption]> {
        self.0.get(&key).and_then(|selection| selection.as_deref())
    }

    pub fn keys(&self) -> impl Iterator<Item = FilterKey> + '_ {
        self.0.keys().copied()
    }

    /// Shallow overwrite: every key of `patch` replaces the same key of `self`.
    pub fn merge(&self, patch: &SelectableFilter) -> SelectableFilter {
        let mut merged = self.0.clone();
        for (key, selection) in &patch.0 {
            merged.insert(*key, selection.clone());
        }
        SelectableFilter(merged)
    }

    /// Drop keys whose selection is unset or empty.
    pub fn clean(&self) -> SelectableFilter {
        let kept = self
            .0
            .iter()
            .filter(|(_, selection)| selection.as_ref().is_some_and(|options| !options.is_empty()))
            .map(|(key, selection)| (*key, selection.clone()));
        SelectableFilter(kept.collect())
    }

    /// Single-select projection: the first option's value per key.
    pub fn to_filters_value(&self) -> FilterValue {
        FilterMap::from_fn(|key| self.get(key).and_then(|options| options.first()).map(|option| option.value.clone()))
    }

    pub fn group_by_category(&self) -> FilterCategoryGroup {
        FilterCategory::ALL
            .into_iter()
            .map(|category| {
                let members = category
                    .keys()
                    .iter()
                    .map(|key| (*key, self.0.get(key).cloned().flatten()))
                    .collect::<Vec<_>>();
                (category, members)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterCategory {
    GeneralInformation,
    SourcesAndFormats,
    ThematicKeywords,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::GeneralInformation,
        FilterCategory::SourcesAndFormats,
        FilterCategory::ThematicKeywords,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FilterCategory::GeneralInformation => "Informations Générales",
            FilterCategory::SourcesAndFormats => "Sources et Formats",
            FilterCategory::ThematicKeywords => "Mots-clés Thématiques",
        }
    }

    /// Member keys, in display order.
    pub fn keys(self) -> &'static [FilterKey] {
        match self {
            FilterCategory::GeneralInformation => {
                &[FilterKey::GeographicalCoverage, FilterKey::Service, FilterKey::License]
            }
            FilterCategory::SourcesAndFormats => &[FilterKey::Format, FilterKey::TechnicalSource],
            FilterCategory::ThematicKeywords => &[FilterKey::TagId],
        }
    }
}

/// Display sections, each with exactly its member keys in `FilterCategory::keys` order.
pub type FilterCategoryGroup = BTreeMap<FilterCategory, Vec<(FilterKey, Option<Vec<FilterOption>>)>>;


#[cfg(test)]
mod tests {
    use super::*;

    fn opt(value: &str) -> FilterOption {
        FilterOption::new(value, value)
    }

    fn sample() -> SelectableFilter {
        SelectableFilter::new()
            .with(FilterKey::TagId, None)
            .with(FilterKey::GeographicalCoverage, Some(vec![FilterOption::new("EPCI", "epci")]))
            .with(FilterKey::Service, Some(vec![opt("DINUM")]))
            .with(FilterKey::TechnicalSource, Some(vec![opt("foo")]))
            .with(FilterKey::Format, Some(vec![]))
    }

    #[test]
    fn clean_drops_unset_and_empty() {
        let cleaned = sample().clean();
        assert_eq!(
            cleaned.keys().collect::<Vec<_>>(),
            vec![FilterKey::GeographicalCoverage, FilterKey::Service, FilterKey::TechnicalSource]
        );
        assert_eq!(cleaned.clean(), cleaned);
    }

    #[test]
    fn merge_overwrites_patched_keys_only() {
        let base = SelectableFilter::new().with(FilterKey::TagId, Some(vec![FilterOption::new("bar", "foo")]));
        let patch = SelectableFilter::new().with(FilterKey::Service, Some(vec![opt("DINUM")]));
        let merged = base.merge(&patch);
        assert_eq!(merged.get(FilterKey::Service), Some(&[opt("DINUM")][..]));
        assert_eq!(merged.get(FilterKey::TagId), Some(&[FilterOption::new("bar", "foo")][..]));
    }

    #[test]
    fn merge_is_shallow() {
        let base = SelectableFilter::new().with(FilterKey::Service, Some(vec![opt("DINUM"), opt("DGSE")]));
        let patch = SelectableFilter::new().with(FilterKey::Service, Some(vec![opt("ETALAB")]));
        assert_eq!(base.merge(&patch).get(FilterKey::Service), Some(&[opt("ETALAB")][..]));
    }

    #[test]
    fn merge_then_clean_removes_unset_patch_keys() {
        let base = SelectableFilter::new()
            .with(FilterKey::Service, Some(vec![opt("DINUM")]))
            .with(FilterKey::TagId, Some(vec![opt("new"), opt("old")]));
        let patch = SelectableFilter::new()
            .with(FilterKey::Service, None)
            .with(FilterKey::TagId, Some(vec![opt("new")]));
        let result = base.merge(&patch).clean();
        assert_eq!(result, SelectableFilter::new().with(FilterKey::TagId, Some(vec![opt("new")])));
    }

    #[test]
    fn group_by_category_has_exactly_member_keys() {
        let groups = sample().group_by_category();
        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups[&FilterCategory::GeneralInformation],
            vec![
                (FilterKey::GeographicalCoverage, Some(vec![FilterOption::new("EPCI", "epci")])),
                (FilterKey::Service, Some(vec![opt("DINUM")])),
                (FilterKey::License, None),
            ]
        );
        assert_eq!(
            groups[&FilterCategory::SourcesAndFormats],
            vec![(FilterKey::Format, Some(vec![])), (FilterKey::TechnicalSource, Some(vec![opt("foo")]))]
        );
        assert_eq!(groups[&FilterCategory::ThematicKeywords], vec![(FilterKey::TagId, None)]);
    }

    #[test]
    fn groups_follow_configured_key_order() {
        let groups = SelectableFilter::new().group_by_category();
        for category in FilterCategory::ALL {
            let keys = groups[&category].iter().map(|(key, _)| *key).collect::<Vec<_>>();
            assert_eq!(keys, category.keys());
        }
    }

    #[test]
    fn categories_cover_every_key_once() {
        let mut keys = FilterCategory::ALL.iter().flat_map(|c| c.keys().iter().copied()).collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, FilterKey::ALL.to_vec());
    }

    #[test]
    fn from_selection_picks_matching_option() {
        let options = FilterMap {
            format: vec![FilterOption::new("API (REST, GraphQL, ...)", "api")],
            service: vec![opt("DINUM")],
            ..Default::default()
        };
        let value = FilterValue {
            format: Some("api".into()),
            service: Some("stale".into()),
            ..Default::default()
        };
        let filter = SelectableFilter::from_selection(&value, &options);
        assert_eq!(filter.get(FilterKey::Format), Some(&[FilterOption::new("API (REST, GraphQL, ...)", "api")][..]));
        assert_eq!(filter.get(FilterKey::Service), Some(&[opt("stale")][..]));
        assert_eq!(filter.get(FilterKey::License), None);
        assert_eq!(filter.0.get(&FilterKey::License), Some(&None));
        assert_eq!(filter.to_filters_value().format.as_deref(), Some("api"));
    }
}
