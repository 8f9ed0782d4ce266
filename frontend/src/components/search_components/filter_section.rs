//! Filter controls grouped by category.

use dioxus::{logger::tracing, prelude::*};

use common::dataset_filters::{FilterInfo, FilterOption, FilterValue, to_filters_button_texts, to_filters_options};
use common::filter_key::FilterKey;
use common::search_filter::SelectableFilter;
use common::search_query::DatasetSearchQuery;
use common::tag::{Tag, tag_names};

use crate::components::search_components::filter_select::FilterSelect;
use crate::routes::Route;


#[derive(Clone, Copy)]
pub struct FilterContext {
    pub expanded_filter: Signal<Option<FilterKey>>,
    pub set_expanded_filter: Callback<Option<FilterKey>>,
    /// `None` clears the key.
    pub select_option: Callback<(FilterKey, Option<FilterOption>)>,
}

#[component]
pub fn FilterSection(
    query: ReadSignal<DatasetSearchQuery>,
    filter_info: ReadSignal<FilterInfo>,
    tags: ReadSignal<Vec<Tag>>,
) -> Element {
    let options = use_memo(move || to_filters_options(&filter_info.read()));
    let button_texts = use_memo(move || {
        let names = tag_names(&tags.read());
        to_filters_button_texts(&query.read().filters, &names)
    });
    let selected = use_memo(move || SelectableFilter::from_selection(&query.read().filters, &options.read()));

    let mut expanded_filter = use_signal(|| None::<FilterKey>);
    let set_expanded_filter = Callback::new(move |key: Option<FilterKey>| {
        expanded_filter.set(key);
    });
    let select_option = Callback::new(move |(key, option): (FilterKey, Option<FilterOption>)| {
        expanded_filter.set(None);
        let patch = SelectableFilter::new().with(key, Some(option.into_iter().collect()));
        let filters = selected.read().merge(&patch).clean().to_filters_value();
        if filters == query.read().filters {
            return;
        }
        let next = query.read().with_filters(filters);
        tracing::debug!(filter = %key, query = %next, "filter selection changed");
        navigator().push(Route::dataset_search(next));
    });
    use_context_provider(|| FilterContext {
        expanded_filter,
        set_expanded_filter,
        select_option,
    });

    let groups = selected.read().group_by_category();
    let has_filters = query.read().has_filters();

    rsx! {
        div {
            id: "x-filter-section",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 16px 0;
            ",

            for (category, members) in groups {
                div {
                    key: "{category.title()}",
                    h3 {
                        style: "font-size: 16px; font-weight: 700; margin: 0 0 8px 0;",
                        "{category.title()}"
                    }
                    div {
                        style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 12px;",
                        for (filter_key, selection) in members {
                            FilterSelect {
                                key: "{filter_key}",
                                filter_key,
                                button_text: button_texts.read().get(filter_key).clone(),
                                options: options.read().get(filter_key).clone(),
                                selection,
                            }
                        }
                    }
                }
            }

            if has_filters {
                button {
                    style: "
                        align-self: flex-start;
                        border: none;
                        background: none;
                        color: #000091;
                        text-decoration: underline;
                        cursor: pointer;
                        font-size: 14px;
                    ",
                    onclick: move |_| {
                        let next = query.read().with_filters(FilterValue::default());
                        navigator().push(Route::dataset_search(next));
                    },
                    "Réinitialiser les filtres"
                }
            }
        }
    }
}
