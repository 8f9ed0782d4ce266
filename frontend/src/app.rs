use dioxus::prelude::*;

use crate::components::error_panel::PageErrorBoundary;
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        PageErrorBoundary {
            boundary_name: "App",
            Router::<Route> {}
        }
    }
}
