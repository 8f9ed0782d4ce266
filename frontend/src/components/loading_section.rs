use dioxus::prelude::*;

use crate::components::error_panel::SectionErrorBoundary;

/// A section backed by a server call: loading text while it is pending, an error panel if it fails.
#[component]
pub fn LoadingSection(section: String, children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! { LoadingIndicator {} },
            SectionErrorBoundary {
                section,
                {children}
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        p {
            style: "color:#666666; font-size: 16px; padding: 24px 0; text-align: center;",
            "Chargement des jeux de données…"
        }
    }
}
