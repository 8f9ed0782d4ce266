//! Static display labels for coded filter values.

use crate::filter_key::FilterKey;


/// Raw filter value meaning "no restriction on this key".
pub const ALL_VALUES_SENTINEL: &str = "*";

pub const GEOGRAPHICAL_COVERAGE_LABELS: &[(&str, &str)] = &[
    ("municipality", "Communale"),
    ("epci", "EPCI"),
    ("department", "Départementale"),
    ("region", "Régionale"),
    ("national", "Nationale (métropole)"),
    ("national_full_territory", "Nationale (terr Outre-mer inclus)"),
    ("europe", "Européenne"),
    ("world", "Monde"),
];

pub const DATA_FORMAT_LABELS: &[(&str, &str)] = &[
    ("file_tabular", "Fichier tabulaire (XLS, XLSX, CSV, ...)"),
    ("file_gis", "Fichier SIG (Shapefile, ...)"),
    ("api", "API (REST, GraphQL, ...)"),
    ("database", "Base de données"),
    ("website", "Site web"),
    ("other", "Autre"),
];

pub const DATA_FORMAT_SHORT_NAMES: &[(&str, &str)] = &[
    ("file_tabular", "CSV"),
    ("file_gis", "SIG"),
    ("api", "API"),
    ("database", "BDD"),
    ("website", "Web"),
    ("other", "Autre"),
];

fn lookup(table: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    table.iter().find(|(code, _)| *code == value).map(|(_, label)| *label)
}

/// The label table attached to `key`, if that key has coded values.
pub fn label_table(key: FilterKey) -> Option<&'static [(&'static str, &'static str)]> {
    match key {
        FilterKey::GeographicalCoverage => Some(GEOGRAPHICAL_COVERAGE_LABELS),
        FilterKey::Format => Some(DATA_FORMAT_LABELS),
        _ => None,
    }
}

pub fn all_values_label(key: FilterKey) -> &'static str {
    match key {
        FilterKey::License => "Toutes les licences",
        _ => "Toutes les valeurs",
    }
}

/// Label for a plain (non-tag) raw value. Never fails: unknown values label themselves.
pub fn value_label(key: FilterKey, value: &str) -> String {
    if value == ALL_VALUES_SENTINEL {
        return all_values_label(key).to_string();
    }
    label_table(key)
        .and_then(|table| lookup(table, value))
        .map(|label| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn data_format_short_name(format: &str) -> Option<&'static str> {
    lookup(DATA_FORMAT_SHORT_NAMES, format)
}
