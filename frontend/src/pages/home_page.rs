use dioxus::prelude::*;

use common::dataset_filters::FilterValue;
use common::labels::DATA_FORMAT_LABELS;
use common::search_query::DatasetSearchQuery;

use crate::components::search_components::search_input_top_bar::SearchInputTopBar;
use crate::routes::Route;


#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Catalogue des données - Accueil" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 100%;
                padding: 48px 40px;
                box-sizing: border-box;
            ",

            h1 {
                style: "font-size: 40px; margin: 0;",
                "Trouvez les données de l'administration"
            }
            p {
                style: "font-size: 20px; max-width: 720px; margin: 0; color: #3A3A3A;",
                "Recherchez parmi les jeux de données référencés par les services publics, puis affinez par couverture géographique, producteur, format ou licence."
            }

            SearchInputTopBar { original_query: DatasetSearchQuery::default() }

            FormatShortcuts {}
        }
    }
}

/// One link per data format, straight to the filtered search.
#[component]
fn FormatShortcuts() -> Element {
    rsx! {
        div {
            h2 {
                style: "font-size: 20px; margin: 16px 0 8px 0;",
                "Parcourir par format"
            }
            div {
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 12px;",
                for (format, label) in DATA_FORMAT_LABELS.iter().copied() {
                    Link {
                        key: "{format}",
                        to: Route::dataset_search(DatasetSearchQuery::default().with_filters(FilterValue {
                            format: Some(format.to_string()),
                            ..Default::default()
                        })),
                        style: "
                            padding: 10px 16px;
                            background: white;
                            border: 1px solid #DDDDDD;
                            border-radius: 4px;
                            text-decoration: none;
                            color: #000091;
                        ",
                        "{label}"
                    }
                }
            }
        }
    }
}
