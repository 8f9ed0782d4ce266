use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::search_query::DatasetSearchQuery;

use crate::routes::Route;


/// Free-text search box. Submitting keeps the filters and goes back to page 1.
#[component]
pub fn SearchInputTopBar(original_query: ReadSignal<DatasetSearchQuery>) -> Element {
    let mut search_text = use_signal(|| original_query.read().q.clone().unwrap_or_default());
    // signals survive navigation, so follow the url
    use_effect(move || {
        let q = original_query.read().q.clone().unwrap_or_default();
        search_text.set(q);
    });
    let text_has_changed = use_memo(move || {
        original_query.read().q.as_deref().unwrap_or_default() != search_text.read().trim()
    });
    let search_button_color = use_memo(move || if text_has_changed() { "#000091" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        let next = original_query.read().with_search_text(&search_text.read());
        tracing::debug!(q = ?next.q, "search text submitted");
        navigator().push(Route::dataset_search(next));
    };
    let search_oninput = move |event: Event<FormData>| {
        search_text.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 12px;
                background-color: white;
                border-radius: 4px 4px 0 0;
                border-bottom: 2px solid #000091;
                padding: 8px 14px;
                height: 44px;
                max-width: 720px;
            ",

            input {
                r#type: "search",
                placeholder: "Rechercher un jeu de données",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #161616;
                    font-size: 18px;
                ",
                value: "{search_text}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 24px; height: 24px; color:{search_button_color()};" }
            }
        }
    }
}
