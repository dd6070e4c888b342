use dioxus::prelude::*;

use common::post_summary::PostSummary;
use common::search_query::SearchQuery;

use crate::api::search_api::fetch_posts;
use crate::components::search_components::post_card::PostResultCard;
use crate::components::search_components::search_bar::SearchBar;
use crate::components::suspend_boundary::{LoadingIndicator, SuspendWrapper};
use crate::data_definitions::route_state::RouteState;
use crate::routes::Route;


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search results page
#[component]
pub fn SearchPage(query: RouteState<SearchQuery>) -> Element {
    rsx! {
        Title { "BlogCommunity Search: {title_ellipsis(&query.0.query_string)}" }
        SearchPageRootComponent { query: query.0.clone() }
    }
}

#[component]
fn SearchPageRootComponent(query: ReadSignal<SearchQuery>) -> Element {
    let mut posts = use_resource(move || {
        let q = query.read().clone();
        fetch_posts(q)
    });
    // navigation does not remount this page, so restart the lookup when
    // the route query changes
    use_effect(move || {
        let _ = query.read();
        posts.clear();
        posts.restart();
    });
    let results: ReadSignal<Option<Vec<PostSummary>>> = posts.into();

    rsx! {
        div {
            id: "x-search-page-root",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            div {
                id: "x-search-page-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    padding: 16px;
                ",
                SearchBar {
                    initial_query: query.read().query_string.clone(),
                    on_search: move |q: SearchQuery| {
                        navigator().push(Route::search_page_from_query(q));
                    },
                }
            }

            div {
                id: "x-search-page-results",
                style: "
                    flex-grow: 1;
                    width: 100%;
                    max-width: 860px;
                    padding: 10px 24px;
                    overflow-y: auto;
                ",
                SuspendWrapper {
                    PostResultsView { results, query }
                }
            }
        }
    }
}

#[component]
fn PostResultsView(
    results: ReadSignal<Option<Vec<PostSummary>>>,
    query: ReadSignal<SearchQuery>,
) -> Element {
    let results = results.read();
    let post_list = match results.as_ref() {
        Some(posts) => posts.clone(),
        None => return rsx! { LoadingIndicator {} },
    };
    let query_string = query.read().query_string.clone();
    let active_filter_count = query.read().filters.active_filter_count();

    rsx! {
        div {
            id: "x-search-results-header",
            style: "
                display: flex;
                flex-direction: row;
                align-items: baseline;
                gap: 10px;
                padding: 10px 0;
                color: #374151;
                font-size: 15px;
            ",
            span {
                style: "font-weight: 600; color: #111827;",
                if post_list.len() == 1 {
                    "1 story"
                } else {
                    "{post_list.len()} stories"
                }
            }
            if !query_string.is_empty() {
                span { "for \"{query_string}\"" }
            }
            if active_filter_count > 0 {
                span {
                    style: "color: #6B7280;",
                    if active_filter_count == 1 {
                        "(1 filter active)"
                    } else {
                        "({active_filter_count} filters active)"
                    }
                }
            }
        }

        if post_list.is_empty() {
            div {
                style: "
                    padding: 40px 0;
                    color: #6B7280;
                    font-size: 16px;
                ",
                "No stories match this search. Try a different query or remove a filter."
            }
        } else {
            ul {
                id: "x-search-results-list",
                for post in post_list.into_iter() {
                    li { key: "{post.id}",
                        PostResultCard { post: post.clone() }
                    }
                }
            }
        }
    }
}
