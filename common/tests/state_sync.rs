//! End-to-end checks of the filter selection -> URL -> request pipeline.

use common::dataset_filters::{FilterInfo, FilterOption, FilterValue, to_filters_options, to_filters_params, to_filters_value};
use common::filter_key::FilterKey;
use common::pager::{Pager, PagerOptions, get_page_from_params};
use common::pagination::Page;
use common::query_string::{QueryParam, QueryParams, patch_query_string, to_query_string};
use common::search_const::PAGE_SIZE;
use common::search_filter::SelectableFilter;
use common::search_query::{DatasetSearchQuery, page_link};
use common::tag::Tag;


fn filter_info() -> FilterInfo {
    FilterInfo {
        geographical_coverage: vec!["epci".into(), "department".into(), "national".into()],
        service: vec!["DINUM".into(), "ETALAB".into()],
        format: vec!["file_tabular".into(), "api".into()],
        technical_source: vec!["Serveur GIS".into()],
        tag_id: vec![Tag::new("t-1", "Environnement"), Tag::new("t-2", "Transports")],
        license: vec!["*".into(), "Licence Ouverte".into()],
    }
}

#[test]
fn user_selection_reaches_the_url_and_back() {
    let options = to_filters_options(&filter_info());
    let current = DatasetSearchQuery::from_query_string("?q=bus&service=DINUM&page=4");
    let selected = SelectableFilter::from_selection(&current.filters, &options);

    // pick a tag, drop the service
    let patch = SelectableFilter::new()
        .with(FilterKey::TagId, Some(vec![FilterOption::new("Transports", "t-2")]))
        .with(FilterKey::Service, Some(vec![]));
    let filters = selected.merge(&patch).clean().to_filters_value();
    let next = current.with_filters(filters);

    let url = next.to_query_string();
    assert_eq!(url, "?q=bus&tag_id=t-2");

    let reloaded = DatasetSearchQuery::from_query_string(&url);
    assert_eq!(reloaded, next);
    assert_eq!(reloaded.filters.service, None);
    assert_eq!(reloaded.page, 1);
}

#[test]
fn filter_value_round_trip() {
    let values = [
        FilterValue::default(),
        FilterValue {
            geographical_coverage: Some("France métropolitaine".into()),
            format: Some("file_gis".into()),
            license: Some("Licence Ouverte".into()),
            ..Default::default()
        },
        FilterValue {
            service: Some("a&b=c+d %".into()),
            technical_source: Some("".into()),
            tag_id: Some("t-1".into()),
            ..Default::default()
        },
    ];
    for value in values {
        let query = to_query_string(&to_filters_params(&value));
        assert!(query.starts_with('?'));
        assert_eq!(to_filters_value(&QueryParams::parse(&query)), value);
    }
}

#[test]
fn filter_patch_keeps_search_text_and_page() {
    let existing = QueryParams::parse("q=air&page=2&format=api");
    let value = FilterValue { service: Some("DINUM".into()), ..Default::default() };
    let patched = patch_query_string(&existing, &to_filters_params(&value));
    assert_eq!(patched, "?q=air&page=2&service=DINUM");
    assert_eq!(get_page_from_params(&QueryParams::parse(&patched)), 2);
}

#[test]
fn null_pairs_never_reach_the_url() {
    assert_eq!(to_query_string(&[QueryParam::unset("q"), QueryParam::set("a", "1")]), "?a=1");
}

#[test]
fn pager_links_follow_the_window() {
    let existing = QueryParams::parse("q=bus&tag_id=t-2&page=5");
    let pager = Pager::new(PagerOptions::new(get_page_from_params(&existing), 9)).unwrap();
    let links = pager.window().map(|page| page_link(&existing, page)).collect::<Vec<_>>();
    assert_eq!(
        links,
        vec![
            "?q=bus&tag_id=t-2&page=3",
            "?q=bus&tag_id=t-2&page=4",
            "?q=bus&tag_id=t-2&page=5",
            "?q=bus&tag_id=t-2&page=6",
            "?q=bus&tag_id=t-2&page=7",
        ]
    );
    assert_eq!(page_link(&existing, pager.first_page()), "?q=bus&tag_id=t-2");
}

#[test]
fn request_params_use_wire_names() {
    let query = DatasetSearchQuery::from_query_string("?geographical_coverage=epci&technical_source=Serveur%20GIS&page=2");
    let request = to_query_string(&query.to_request_params(25));
    assert_eq!(
        request,
        "?geographical_coverage=epci&technical_source=Serveur%20GIS&page_number=2&page_size=25"
    );
}

#[test]
fn oversized_page_is_capped_before_the_request() {
    let query = DatasetSearchQuery::from_query_string("?q=bus&page=10001");
    assert_eq!(query.page, 10_000);
    assert!(Page::new(query.page, PAGE_SIZE).is_ok());
    assert_eq!(query.to_query_string(), "?q=bus&page=10000");
}
