use dioxus::prelude::*;

use common::search_query::SearchQuery;

use crate::components::navbar::Navbar;
use crate::data_definitions::route_state::RouteState;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    HomePage {},

    #[route("/search/:query")]
    SearchPage {
        query: RouteState<SearchQuery>,
    },
}

impl Route {
    pub fn search_page_from_query(q: SearchQuery) -> Self {
        Self::SearchPage { query: RouteState::from(q) }
    }
}
