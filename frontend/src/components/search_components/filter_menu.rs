//! Advanced search filter dropdown.
//!
//! Facet selections narrow results orthogonally to the query text and are
//! only read at submit time. The option lists mirror what the hosted
//! catalog exposes today.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_content_icons::MdFilterList,
        md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
    },
};

use common::search_filters::{DateFilter, PopularityFilter};

use crate::components::search_components::search_bar::SearchBarState;


const CATEGORY_OPTIONS: [(&str, &str); 6] = [
    ("Technology", "technology"),
    ("Travel", "travel"),
    ("Fitness", "fitness"),
    ("Food", "food"),
    ("Art", "art"),
    ("Music", "music"),
];

const AUTHOR_OPTIONS: [&str; 4] =
    ["Sarah Chen", "Marcus Rodriguez", "Dr. Emily Watson", "Chef Maria Santos"];

const TAG_OPTIONS: [&str; 5] = ["SEO", "AI", "Photography", "Monetization", "Mindfulness"];


#[component]
pub(crate) fn FilterMenu() -> Element {
    let state = use_context::<SearchBarState>();
    let mut filters = state.filters;
    let mut expanded = use_signal(|| false);
    let active_count = use_memo(move || filters.read().active_filter_count());

    rsx! {
        div {
            style: "position: relative; flex-shrink: 0;",

            if expanded() {
                // click-away layer under the dropdown
                div {
                    style: "
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100vw;
                        height: 100vh;
                        z-index: 60;
                    ",
                    onclick: move |_| {
                        expanded.set(false);
                    },
                }
                div {
                    id: "x-search-filter-dropdown",
                    style: "
                        position: absolute;
                        top: calc(100% + 8px);
                        right: 0;
                        width: 240px;
                        max-height: 420px;
                        overflow-y: auto;
                        background-color: white;
                        border: 1px solid #D1D5DB;
                        border-radius: 10px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                        padding: 8px;
                        z-index: 70;
                    ",

                    SectionLabel { text: "Categories" }
                    for (label, value) in CATEGORY_OPTIONS {
                        CheckRow {
                            label: label.to_string(),
                            checked: filters.read().categories.contains(value),
                            ontoggle: move |_: ()| {
                                filters.write().toggle_category(value);
                            },
                        }
                    }

                    SectionDivider {}
                    SectionLabel { text: "Authors" }
                    for author in AUTHOR_OPTIONS {
                        CheckRow {
                            label: author.to_string(),
                            checked: filters.read().authors.contains(author),
                            ontoggle: move |_: ()| {
                                filters.write().toggle_author(author);
                            },
                        }
                    }

                    SectionDivider {}
                    SectionLabel { text: "Tags" }
                    for tag in TAG_OPTIONS {
                        CheckRow {
                            label: tag.to_string(),
                            checked: filters.read().tags.contains(tag),
                            ontoggle: move |_: ()| {
                                filters.write().toggle_tag(tag);
                            },
                        }
                    }

                    SectionDivider {}
                    SectionLabel { text: "Date" }
                    for option in DateFilter::ALL {
                        CheckRow {
                            label: option.label().to_string(),
                            checked: filters.read().date == option,
                            ontoggle: move |_: ()| {
                                if let Err(err) = filters.write().set_date(option.value()) {
                                    tracing::warn!("rejected date filter: {err}");
                                }
                            },
                        }
                    }

                    SectionDivider {}
                    SectionLabel { text: "Popularity" }
                    for option in PopularityFilter::ALL {
                        CheckRow {
                            label: option.label().to_string(),
                            checked: filters.read().popularity == option,
                            ontoggle: move |_: ()| {
                                if let Err(err) = filters.write().set_popularity(option.value()) {
                                    tracing::warn!("rejected popularity filter: {err}");
                                }
                            },
                        }
                    }
                }
            }

            button {
                id: "x-search-filter-button",
                style: "
                    position: relative;
                    border: none;
                    background: none;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    padding: 4px;
                ",
                onclick: move |_| {
                    let now_expanded = expanded.peek().clone();
                    expanded.set(!now_expanded);
                },
                Icon { icon: MdFilterList, style: "width: 20px; height: 20px; color: #6B7280;" }
                if active_count() > 0 {
                    span {
                        style: "
                            position: absolute;
                            top: -4px;
                            right: -4px;
                            min-width: 16px;
                            height: 16px;
                            border-radius: 9999px;
                            background-color: #1C212D;
                            color: white;
                            font-size: 10px;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            padding: 0 3px;
                        ",
                        "{active_count}"
                    }
                }
            }
        }
    }
}

#[component]
fn SectionLabel(text: String) -> Element {
    rsx! {
        div {
            style: "
                padding: 6px 8px 2px 8px;
                font-size: 12px;
                font-weight: 600;
                color: #6B7280;
                text-transform: uppercase;
                letter-spacing: 0.04em;
            ",
            "{text}"
        }
    }
}

#[component]
fn SectionDivider() -> Element {
    rsx! {
        div { style: "border-top: 1px solid #E5E7EB; margin: 6px 0;" }
    }
}

#[component]
fn CheckRow(label: String, checked: bool, ontoggle: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-filter-check-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                padding: 5px 8px;
                cursor: pointer;
                border-radius: 6px;
            ",
            onclick: move |_| {
                ontoggle(());
            },
            if checked {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #1C212D; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #6B7280; flex-shrink: 0;" }
            }
            span {
                style: "font-size: 14px; color: #111827;",
                "{label}"
            }
        }
    }
}
