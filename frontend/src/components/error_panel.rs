//! How failures are shown: a whole page, or one section of it.

use dioxus::{logger::tracing, prelude::*};

/// Catches render errors for everything below a route layout.
#[component]
pub fn PageErrorBoundary(boundary_name: String, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                tracing::error!(boundary = %boundary_name, "page failed to render: {err:?}");
                rsx! {
                    ErrorPanel {
                        title: "Cette page n'a pas pu s'afficher",
                        details: format!("{err:#?}"),
                        // may sit above the router, so no `Link`
                        a {
                            href: "/",
                            style: "color:#000091; font-size: 16px;",
                            "Retour à l'accueil"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing section from taking the rest of the page down, and lets the user retry it.
#[component]
pub fn SectionErrorBoundary(section: String, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let details = match err.error() {
                    Some(error) => format!("{error:?}"),
                    None => "Erreur inconnue".to_string(),
                };
                tracing::warn!(%section, %details, "section failed");
                rsx! {
                    ErrorPanel {
                        title: "Impossible d'afficher « {section} »",
                        details,
                        button {
                            style: "color:#000091; font-size: 16px; border: 1px solid #000091; background: white; padding: 6px 12px; border-radius: 4px; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Réessayer"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ErrorPanel(title: String, details: String, children: Element) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                align-items: flex-start;
                margin: 16px 0;
                padding: 16px 20px;
                background-color: #FFE9E9;
                border-left: 4px solid #CE0500;
            ",
            strong {
                style: "color:#CE0500; font-size: 18px;",
                "{title}"
            }
            pre {
                style: "margin: 0; color:#3A3A3A; font-size: 13px; white-space: pre-wrap; max-height: 240px; overflow-y: auto;",
                "{details}"
            }
            {children}
        }
    }
}
