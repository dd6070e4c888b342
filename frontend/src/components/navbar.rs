//! Top-level navigation sidebar.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use common::search_query::SearchQuery;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100vh;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    padding: 16px;
                    align-items: center;
                    flex-shrink: 0;
                ",

                NavbarLogo {}
                NavbarIconLinks {}

                // empty space
                div {
                    style: "flex-grow: 1;"
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            span {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 38px;
                    height: 38px;
                    border-radius: 10px;
                    background-color: #4F46E5;
                    color: white;
                    font-size: 16px;
                    font-weight: 600;
                    text-decoration: none;
                ",
                "BC"
            }
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::search_page_from_query(SearchQuery::default()), icon: MdSearch, label: "Search" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color: white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
