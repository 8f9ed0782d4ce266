//! Dataset search page: text search, filters, results and pagination.

use dioxus::{logger::tracing, prelude::*};

use common::search_query::DatasetSearchQuery;

use crate::{
    api::catalog_api::load_dataset_search,
    components::{
        error_panel::ErrorPanel,
        loading_section::{LoadingIndicator, LoadingSection},
        search_components::{
            dataset_result_card::DatasetResultCard,
            filter_section::FilterSection,
            pagination_strip::PaginationStrip,
            search_input_top_bar::SearchInputTopBar,
        },
    },
    routes::Route,
};


fn page_title(query: &DatasetSearchQuery) -> String {
    match query.q.as_deref() {
        Some(q) if q.chars().count() > 20 => format!("{}...", q.chars().take(18).collect::<String>()),
        Some(q) => q.to_string(),
        None => "Tous les jeux de données".to_string(),
    }
}

fn result_count_text(total_items: u64) -> String {
    match total_items {
        0 => "Aucun jeu de données trouvé".to_string(),
        1 => "1 jeu de données".to_string(),
        n => format!("{n} jeux de données"),
    }
}

#[component]
pub fn DatasetSearchPage(query: DatasetSearchQuery) -> Element {
    rsx! {
        Title { "Catalogue des données : {page_title(&query)}" }
        div {
            id: "x-search-page-root-component",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                width: 100%;
                max-width: 1100px;
                margin: 0 auto;
                padding: 24px 32px;
                box-sizing: border-box;
            ",
            SearchInputTopBar { original_query: query.clone() }
            LoadingSection {
                section: "Résultats",
                DatasetSearchResultsView { query }
            }
        }
    }
}

#[component]
fn DatasetSearchResultsView(query: ReadSignal<DatasetSearchQuery>) -> Element {
    let nav = navigator();
    let search_result = use_resource(move || {
        let q = query.read().clone();
        async move {
            let results = load_dataset_search(q).await?;
            if let Some(target) = results.stale_page_redirect() {
                tracing::debug!(page = results.query.page, to = target.page, "page past the last one");
                nav.replace(Route::dataset_search(target));
            }
            Ok::<_, ServerFnError>(results)
        }
    }).suspend()?.cloned();
    let search_result = match search_result {
        Err(e) => return rsx! { ErrorPanel { title: "La recherche a échoué", details: e.to_string() } },
        Ok(s) => s,
    };
    // the list and the pager wait for the redirect
    if search_result.stale_page_redirect().is_some() {
        return rsx! { LoadingIndicator {} };
    }
    let total_items = search_result.results.total_items;
    let current_page = search_result.query.page;
    let total_pages = search_result.total_pages();

    rsx! {
        FilterSection {
            query,
            filter_info: search_result.filter_info.clone(),
            tags: search_result.tags.clone(),
        }

        h2 {
            style: "font-size: 18px; font-weight: 400; color: #3A3A3A; border-bottom: 1px solid #DDDDDD; padding-bottom: 8px;",
            "{result_count_text(total_items)}"
        }

        div {
            id: "x-search-result-list",
            for dataset in search_result.results.items.iter().cloned() {
                DatasetResultCard { key: "{dataset.id}", dataset: dataset.clone() }
            }
        }

        if total_items > 0 {
            PaginationStrip { query, current_page, total_pages }
        }
    }
}
