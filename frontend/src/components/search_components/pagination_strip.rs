//! Page links under the result list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight, MdFirstPage, MdLastPage}};

use common::pager::{Pager, PagerOptions};
use common::query_string::QueryParams;
use common::search_query::{DatasetSearchQuery, page_link};

use crate::{components::error_panel::ErrorPanel, routes::Route};


/// ```text
/// |<  <  1 … 4 5 [6] 7 8 … 13  >  >|
/// ```
#[component]
pub fn PaginationStrip(query: ReadSignal<DatasetSearchQuery>, current_page: u64, total_pages: u64) -> Element {
    let pager = match Pager::new(PagerOptions::new(current_page, total_pages)) {
        Ok(pager) => pager,
        Err(e) => return rsx! { ErrorPanel { title: "Pagination indisponible", details: e.to_string() } },
    };
    let params = use_memo(move || QueryParams::parse(&query.read().to_query_string()));
    let link = move |page: u64| Route::dataset_search(DatasetSearchQuery::from_query_string(&page_link(&params.read(), page)));

    let first_page = pager.first_page();
    let last_page = pager.last_page();

    rsx! {
        nav {
            role: "navigation",
            aria_label: "Pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 6px;
                padding: 24px 0;
            ",

            PageArrow { icon: MdFirstPage, label: "Première page", to: pager.has_previous().then(|| link(first_page)) }
            PageArrow { icon: MdChevronLeft, label: "Page précédente", to: pager.previous_page().map(link) }

            if pager.has_first_page_landmark() {
                PageLink { page: first_page, to: link(first_page), is_current: false }
            }
            if pager.has_left_truncature() {
                TruncationMarker {}
            }
            for page in pager.window() {
                PageLink { key: "{page}", page, to: link(page), is_current: page == pager.current_page() }
            }
            if pager.has_right_truncature() {
                TruncationMarker {}
            }
            if pager.has_last_page_landmark() {
                PageLink { page: last_page, to: link(last_page), is_current: false }
            }

            PageArrow { icon: MdChevronRight, label: "Page suivante", to: pager.next_page().map(link) }
            PageArrow { icon: MdLastPage, label: "Dernière page", to: pager.has_next().then(|| link(last_page)) }
        }
    }
}

#[component]
fn PageLink(page: u64, to: Route, is_current: bool) -> Element {
    if is_current {
        return rsx! {
            span {
                class: "x-page-link x-page-link-current",
                aria_current: "page",
                "{page}"
            }
        };
    }
    rsx! {
        Link {
            class: "x-page-link",
            to,
            "{page}"
        }
    }
}

#[component]
fn TruncationMarker() -> Element {
    rsx! {
        span { class: "x-page-link", "…" }
    }
}

/// Disabled when there is nowhere to go.
#[component]
fn PageArrow<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, to: ReadSignal<Option<Route>>) -> Element {
    let Some(to) = to.read().clone() else {
        return rsx! {
            span {
                class: "x-page-link x-page-link-disabled",
                title: "{label}",
                Icon { icon, style: "width: 22px; height: 22px;" }
            }
        };
    };
    rsx! {
        Link {
            class: "x-page-link",
            to,
            title: "{label}",
            Icon { icon, style: "width: 22px; height: 22px;" }
        }
    }
}
