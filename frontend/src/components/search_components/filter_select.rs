//! Single-select dropdown for one filter key.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowDropDown};

use common::dataset_filters::{FilterOption, is_all_values, to_select_entries};
use common::filter_key::FilterKey;
use common::labels::all_values_label;

use crate::components::search_components::filter_section::FilterContext;


#[component]
pub fn FilterSelect(
    filter_key: FilterKey,
    button_text: ReadSignal<Option<String>>,
    options: Vec<FilterOption>,
    selection: ReadSignal<Option<Vec<FilterOption>>>,
) -> Element {
    let context = use_context::<FilterContext>();
    let set_expanded_filter = context.set_expanded_filter;
    let is_expanded = *context.expanded_filter.read() == Some(filter_key);

    let selected_option = selection.read().as_ref().and_then(|s| s.first()).cloned();
    let selected_value = selected_option.as_ref().map(|option| option.value.clone());
    let button_label = button_text.read().clone().unwrap_or_else(|| filter_key.placeholder().to_string());

    let entries = to_select_entries(&options, selected_option.as_ref());
    let all_values_selected = is_all_values(selected_value.as_deref());
    let border_color = if all_values_selected { "rgba(0,0,0,0.5)" } else { "#000091" };

    rsx! {
        div {
            style: "position: relative;",

            if is_expanded {
                div {
                    style: "
                        position: fixed;
                        top: 0px;
                        left: 0px;
                        z-index: 999;
                        width: 100%;
                        height: 100%;
                    ",
                    onclick: move |_| {
                        set_expanded_filter.call(None);
                    },
                }
            }

            label {
                style: "display: block; font-size: 13px; color: #3A3A3A; margin-bottom: 4px;",
                "{filter_key.display_name()}"
            }
            button {
                onclick: move |_| {
                    set_expanded_filter.call(if is_expanded { None } else { Some(filter_key) });
                },
                style: "
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 6px;
                    min-width: 220px;
                    max-width: 320px;
                    height: 40px;
                    padding: 0 8px 0 12px;
                    border: 1px solid {border_color};
                    border-radius: 4px;
                    background-color: #EEEEEE;
                    font-size: 15px;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                ",
                "{button_label}"
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; flex-shrink: 0;" }
            }

            if is_expanded {
                ul {
                    style: "
                        position: absolute;
                        top: 64px;
                        left: 0px;
                        z-index: 1000;
                        list-style: none;
                        margin: 0;
                        padding: 6px;
                        min-width: 260px;
                        max-height: 360px;
                        overflow-y: auto;
                        background-color: white;
                        border: 1px solid rgba(0,0,0,0.3);
                        border-radius: 4px;
                        box-shadow: 0 4px 12px rgba(0,0,0,0.15);
                    ",
                    FilterOptionItem {
                        filter_key,
                        label: all_values_label(filter_key).to_string(),
                        option: None,
                        is_selected: all_values_selected,
                    }
                    for option in entries {
                        FilterOptionItem {
                            key: "{option.value}",
                            filter_key,
                            label: option.label.clone(),
                            is_selected: selected_value.as_deref() == Some(option.value.as_str()),
                            option: Some(option.clone()),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterOptionItem(filter_key: FilterKey, label: String, option: ReadSignal<Option<FilterOption>>, is_selected: bool) -> Element {
    let context = use_context::<FilterContext>();
    let select_option = context.select_option;
    let class = if is_selected { "x-filter-option x-filter-option-selected" } else { "x-filter-option" };
    rsx! {
        li {
            class,
            onclick: move |_| {
                select_option.call((filter_key, option.read().clone()));
            },
            "{label}"
        }
    }
}
