use dioxus::prelude::*;

use common::search_query::SearchQuery;

use crate::components::search_components::search_bar::SearchBar;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "BlogCommunity - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background-color: #F5F6F8;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}
            SearchCard {}
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 44px;
                font-weight: 600;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color: #4F46E5;", "BlogCommunity!" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 22px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Read, write and discuss stories from a community of writers. Search across \
             posts, authors and topics to find your next read."
        }
    }
}

#[component]
fn SearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-search",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                width: 680px;
                max-width: 100%;
                border-radius: 22px;
                padding: 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
            ",

            div {
                style: "font-size: 26px; font-weight: 500;",
                "Find a story"
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 1.5;
                    color: rgba(255, 255, 255, 0.92);
                ",
                "Type to see live suggestions, or open the filter menu to narrow by \
                 category, author, tag, date and popularity."
            }

            SearchBar {
                on_search: move |query: SearchQuery| {
                    navigator().push(Route::search_page_from_query(query));
                },
            }
        }
    }
}
