//! The closed set of dataset filter keys and the fixed-shape record keyed by them.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    GeographicalCoverage,
    Service,
    Format,
    TechnicalSource,
    TagId,
    License,
}

impl FilterKey {
    /// Canonical order, shared by encoding and decoding.
    pub const ALL: [FilterKey; 6] = [
        FilterKey::GeographicalCoverage,
        FilterKey::Service,
        FilterKey::Format,
        FilterKey::TechnicalSource,
        FilterKey::TagId,
        FilterKey::License,
    ];

    /// Name used in the URL query string and in backend requests.
    pub fn param_name(self) -> &'static str {
        match self {
            FilterKey::GeographicalCoverage => "geographical_coverage",
            FilterKey::Service => "service",
            FilterKey::Format => "format",
            FilterKey::TechnicalSource => "technical_source",
            FilterKey::TagId => "tag_id",
            FilterKey::License => "license",
        }
    }

    pub fn from_param_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.param_name() == name)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FilterKey::GeographicalCoverage => "Couverture géographique",
            FilterKey::Service => "Service producteur de la donnée",
            FilterKey::Format => "Format de mise à disposition",
            FilterKey::TechnicalSource => "Système d'information source",
            FilterKey::TagId => "Mots-clés",
            FilterKey::License => "Licence de réutilisation",
        }
    }

    /// Text shown on a filter button while nothing is selected.
    pub fn placeholder(self) -> &'static str {
        match self {
            FilterKey::GeographicalCoverage => "Toutes les couvertures",
            FilterKey::Service => "Tous les services",
            FilterKey::Format => "Tous les formats",
            FilterKey::TechnicalSource => "Tous les systèmes",
            FilterKey::TagId => "Tous les mots-clés",
            FilterKey::License => "Toutes les licences",
        }
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.param_name())
    }
}

/// One `T` per filter key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterMap<T> {
    pub geographical_coverage: T,
    pub service: T,
    pub format: T,
    pub technical_source: T,
    pub tag_id: T,
    pub license: T,
}

impl<T> FilterMap<T> {
    pub fn from_fn(mut f: impl FnMut(FilterKey) -> T) -> Self {
        Self {
            geographical_coverage: f(FilterKey::GeographicalCoverage),
            service: f(FilterKey::Service),
            format: f(FilterKey::Format),
            technical_source: f(FilterKey::TechnicalSource),
            tag_id: f(FilterKey::TagId),
            license: f(FilterKey::License),
        }
    }

    pub fn get(&self, key: FilterKey) -> &T {
        match key {
            FilterKey::GeographicalCoverage => &self.geographical_coverage,
            FilterKey::Service => &self.service,
            FilterKey::Format => &self.format,
            FilterKey::TechnicalSource => &self.technical_source,
            FilterKey::TagId => &self.tag_id,
            FilterKey::License => &self.license,
        }
    }

    pub fn get_mut(&mut self, key: FilterKey) -> &mut T {
        match key {
            FilterKey::GeographicalCoverage => &mut self.geographical_coverage,
            FilterKey::Service => &mut self.service,
            FilterKey::Format => &mut self.format,
            FilterKey::TechnicalSource => &mut self.technical_source,
            FilterKey::TagId => &mut self.tag_id,
            FilterKey::License => &mut self.license,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(FilterKey, &T) -> U) -> FilterMap<U> {
        FilterMap::from_fn(|key| f(key, self.get(key)))
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &T)> {
        FilterKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
