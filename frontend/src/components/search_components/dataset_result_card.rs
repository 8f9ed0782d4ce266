use dioxus::prelude::*;

use common::dataset::DatasetSummary;


#[component]
pub fn DatasetResultCard(dataset: ReadSignal<DatasetSummary>) -> Element {
    let DatasetSummary { title, description, service, tags, .. } = dataset.read().clone();
    let coverage = dataset.read().geographical_coverage_label();
    let badges = dataset.read().format_badges();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background: white;
                border: 1px solid #DDDDDD;
                border-bottom: 3px solid #000091;
                padding: 16px 20px;
                margin: 8px 0;
            ",
            div {
                style: "display: flex; flex-direction: row; gap: 6px; flex-wrap: wrap;",
                for badge in badges {
                    span {
                        key: "{badge}",
                        style: "font-size: 12px; font-weight: 700; text-transform: uppercase; background: #EEEEEE; padding: 2px 8px; border-radius: 4px;",
                        "{badge}"
                    }
                }
            }
            h4 {
                style: "font-size: 20px; margin: 0;",
                "{title}"
            }
            p {
                style: "
                    margin: 0;
                    color: #3A3A3A;
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                ",
                "{description}"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 16px; font-size: 14px; color: #666666;",
                span { "{service}" }
                span { "{coverage}" }
            }
            if !tags.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; gap: 6px; flex-wrap: wrap;",
                    for tag in tags {
                        span {
                            key: "{tag.id}",
                            style: "font-size: 12px; background: #E3E3FD; color: #000091; padding: 2px 8px; border-radius: 12px;",
                            "{tag.name}"
                        }
                    }
                }
            }
        }
    }
}
