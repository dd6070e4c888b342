//! Dropdown panel under the search input.
//!
//! Three states: a loading row while a pass is in flight, recent search
//! shortcuts while the field is empty, and the ranked suggestion list for
//! a non-empty query. Zero matches for a non-empty query render an
//! explicit empty-state row rather than hiding the panel.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::{MdSchedule, MdSearch, MdTrendingUp},
        md_social_icons::MdPerson,
    },
};

use common::search_const::VISIBLE_RECENT_SHORTCUTS;
use common::suggestion::{Suggestion, SuggestionKind};

use crate::components::search_components::search_bar::SearchBarState;


#[component]
pub(crate) fn SuggestionPanel() -> Element {
    let state = use_context::<SearchBarState>();
    if !state.panel_open.read().clone() {
        return rsx! {};
    }

    let query = state.query_text.read().clone();
    let searching = state.is_searching.read().clone();
    let suggestions = state.suggestions.read().clone();
    let recents: Vec<String> = state
        .journal
        .read()
        .entries()
        .iter()
        .take(VISIBLE_RECENT_SHORTCUTS)
        .cloned()
        .collect();
    if !searching && query.trim().is_empty() && recents.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-search-suggestion-panel",
            style: "
                position: absolute;
                top: calc(100% + 4px);
                left: 0;
                width: 100%;
                background-color: white;
                border: 1px solid #D1D5DB;
                border-radius: 10px;
                box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                z-index: 50;
                overflow: hidden;
            ",
            if searching {
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 24px;
                        color: #6B7280;
                        font-size: 14px;
                    ",
                    "Searching..."
                }
            } else if query.trim().is_empty() {
                PanelHeading { text: "Recent Searches" }
                ul {
                    for (index, recent) in recents.into_iter().enumerate() {
                        li { key: "recent-{index}",
                            SuggestionRow {
                                suggestion: Suggestion::new(
                                    format!("recent-{index}"),
                                    recent,
                                    SuggestionKind::Query,
                                ),
                            }
                        }
                    }
                }
            } else if suggestions.is_empty() {
                div {
                    style: "
                        padding: 24px;
                        text-align: center;
                        color: #6B7280;
                        font-size: 14px;
                    ",
                    "No results found for \"{query}\""
                }
            } else {
                PanelHeading { text: "Suggestions" }
                ul {
                    for suggestion in suggestions {
                        li { key: "{suggestion.id}",
                            SuggestionRow { suggestion: suggestion.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PanelHeading(text: String) -> Element {
    rsx! {
        div {
            style: "
                padding: 8px 12px 4px 12px;
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
fn SuggestionRow(suggestion: Suggestion) -> Element {
    let state = use_context::<SearchBarState>();
    let select_suggestion = state.select_suggestion;
    let selected = suggestion.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                padding: 8px 12px;
                cursor: pointer;
            ",
            onclick: move |_| {
                select_suggestion(selected.clone());
            },
            KindIcon { kind: suggestion.kind }
            div {
                style: "flex: 1; min-width: 0;",
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 8px;
                    ",
                    span {
                        style: "
                            font-size: 15px;
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                        ",
                        "{suggestion.text}"
                    }
                    if suggestion.is_trending() {
                        TrendingBadge {}
                    }
                }
                if suggestion.kind == SuggestionKind::Post {
                    PostMetadataLine { suggestion: suggestion.clone() }
                }
            }
            KindBadge { kind: suggestion.kind }
        }
    }
}

/// Secondary line under post suggestions: category, view count, author.
#[component]
fn PostMetadataLine(suggestion: Suggestion) -> Element {
    let Some(metadata) = suggestion.metadata.clone() else {
        return rsx! {};
    };
    let category = suggestion.category.clone().unwrap_or_default();
    let views = metadata.views.unwrap_or(0);
    let author = metadata.author.clone().unwrap_or_default();

    rsx! {
        div {
            style: "
                font-size: 12px;
                color: #6B7280;
                margin-top: 2px;
            ",
            "{category} \u{2022} {views} views \u{2022} by {author}"
        }
    }
}

#[component]
fn KindIcon(kind: SuggestionKind) -> Element {
    let icon_style = "width: 14px; height: 14px; color: #6B7280; flex-shrink: 0;";
    match kind {
        SuggestionKind::Post => rsx! { Icon { icon: MdSearch, style: icon_style } },
        SuggestionKind::Author => rsx! { Icon { icon: MdPerson, style: icon_style } },
        SuggestionKind::Tag => rsx! { Icon { icon: MdTrendingUp, style: icon_style } },
        SuggestionKind::Query => rsx! { Icon { icon: MdSchedule, style: icon_style } },
    }
}

#[component]
fn KindBadge(kind: SuggestionKind) -> Element {
    rsx! {
        span {
            style: "
                font-size: 11px;
                color: #6B7280;
                border: 1px solid #D1D5DB;
                border-radius: 9999px;
                padding: 1px 8px;
                flex-shrink: 0;
                text-transform: capitalize;
            ",
            "{kind.label()}"
        }
    }
}

#[component]
pub(crate) fn TrendingBadge() -> Element {
    rsx! {
        span {
            style: "
                display: inline-flex;
                align-items: center;
                gap: 3px;
                font-size: 11px;
                color: #4F46E5;
                background-color: #EEF2FF;
                border-radius: 9999px;
                padding: 1px 8px;
                flex-shrink: 0;
            ",
            Icon { icon: MdTrendingUp, style: "width: 10px; height: 10px;" }
            "Trending"
        }
    }
}
