//! Header bar shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use common::search_query::DatasetSearchQuery;

use crate::components::error_panel::PageErrorBoundary;
use crate::routes::Route;


#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            div {
                id: "x-nav-header",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 32px;
                    height: 64px;
                    padding: 0 32px;
                    background-color: white;
                    border-bottom: 1px solid #DDDDDD;
                ",

                Link {
                    to: Route::HomePage {},
                    style: "font-size: 20px; font-weight: 700; text-decoration: none;",
                    "Catalogue des données"
                }

                // empty space
                div {
                    style: "flex-grow:1;"
                }

                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Accueil" }
                IconLink { to: Route::dataset_search(DatasetSearchQuery::default()), icon: MdSearch, label: "Rechercher" }
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1;",
                PageErrorBoundary {
                    boundary_name: "Navbar",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            style: "display:flex; align-items:center; gap: 6px; color:#000091; text-decoration: none;",
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
            "{label}"
        }
    }
}
