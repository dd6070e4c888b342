//! Search input with debounced suggestions and facet filters.
//!
//! Keystrokes are buffered for a quiet period before a suggestion pass
//! runs; explicit submit and suggestion selection bypass the buffer, fire
//! the host callback once and update the recent search journal. Debounce
//! passes never reach the host.

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose},
};
use gloo_timers::future::TimeoutFuture;

use common::recent_searches::RecentSearchJournal;
use common::search_const::DEBOUNCE_QUIET_MS;
use common::search_filters::SearchFilters;
use common::search_query::SearchQuery;
use common::suggestion::Suggestion;
use common::suggestion_engine::SearchSequence;

use crate::api::search_api::fetch_suggestions;
use crate::components::search_components::filter_menu::FilterMenu;
use crate::components::search_components::suggestion_list::SuggestionPanel;
use crate::storage::LocalStorageStore;


/// Shared by the suggestion panel and the filter menu.
#[derive(Clone, Copy)]
pub(crate) struct SearchBarState {
    pub query_text: Signal<String>,
    pub suggestions: Signal<Vec<Suggestion>>,
    pub is_searching: Signal<bool>,
    pub panel_open: Signal<bool>,
    pub journal: Signal<RecentSearchJournal>,
    pub filters: Signal<SearchFilters>,
    pub select_suggestion: Callback<Suggestion>,
}

#[component]
pub fn SearchBar(
    on_search: Callback<SearchQuery>,
    #[props(default = true)] enable_advanced_search: bool,
    #[props(default)] initial_query: String,
) -> Element {
    let mut query_text = use_signal(|| initial_query.clone());
    let mut suggestions = use_signal(Vec::<Suggestion>::new);
    let mut is_searching = use_signal(|| false);
    let mut panel_open = use_signal(|| false);
    let filters = use_signal(SearchFilters::default);
    let mut journal = use_signal(|| RecentSearchJournal::load(Box::new(LocalStorageStore::new())));
    let mut sequence = use_signal(SearchSequence::new);
    let mut pending_lookup = use_signal(|| None::<Task>);

    // One suggestion pass. The ticket taken at initiation decides at
    // resolution time whether the result may still touch the panel.
    let run_lookup = Callback::new(move |text: String| {
        if text.trim().is_empty() {
            suggestions.set(Vec::new());
            panel_open.set(false);
            is_searching.set(false);
            return;
        }
        let ticket = sequence.write().begin();
        is_searching.set(true);
        panel_open.set(true);
        let recents = journal.peek().entries().to_vec();
        spawn(async move {
            let result = fetch_suggestions(text, recents).await;
            if !sequence.peek().is_current(ticket) {
                // a newer pass owns the panel now
                return;
            }
            suggestions.set(result);
            is_searching.set(false);
        });
    });

    let cancel_pending_lookup = Callback::new(move |_: ()| {
        if let Some(task) = pending_lookup.write().take() {
            task.cancel();
        }
    });

    // Explicit submit: skip the quiet period, invalidate in-flight
    // lookups, journal the query and hand it to the host. Blank text is a
    // no-op.
    let submit_search = Callback::new(move |text: String| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        cancel_pending_lookup(());
        sequence.write().begin();
        is_searching.set(false);
        panel_open.set(false);
        journal.write().record(trimmed);
        on_search(SearchQuery {
            query_string: trimmed.to_string(),
            filters: filters.peek().clone(),
        });
    });

    let select_suggestion = Callback::new(move |suggestion: Suggestion| {
        query_text.set(suggestion.text.clone());
        submit_search(suggestion.text);
    });

    let search_oninput = move |event: Event<FormData>| {
        let value = event.value();
        query_text.set(value.clone());
        cancel_pending_lookup(());
        let task = spawn(async move {
            TimeoutFuture::new(DEBOUNCE_QUIET_MS).await;
            run_lookup(value);
        });
        pending_lookup.set(Some(task));
    };

    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            submit_search(query_text.peek().clone());
        }
    };

    // recent searches double as shortcuts while the field is empty
    let search_onfocus = move |_| {
        if query_text.peek().trim().is_empty() && !journal.peek().is_empty() {
            panel_open.set(true);
        }
    };

    let clear_search = move |_| {
        query_text.set(String::new());
        suggestions.set(Vec::new());
        panel_open.set(false);
        is_searching.set(false);
        cancel_pending_lookup(());
        sequence.write().begin();
    };

    use_context_provider(move || SearchBarState {
        query_text,
        suggestions,
        is_searching,
        panel_open,
        journal,
        filters,
        select_suggestion,
    });

    rsx! {
        div {
            id: "x-search-bar-root",
            style: "
                position: relative;
                width: 100%;
                max-width: 640px;
            ",
            div {
                id: "x-search-bar-input-row",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                    background-color: white;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 10px;
                    padding: 6px 10px;
                    height: 44px;
                ",

                button {
                    style: "
                        border: none;
                        background: none;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        padding: 2px;
                    ",
                    onclick: move |_| {
                        submit_search(query_text.peek().clone());
                    },
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
                }
                input {
                    r#type: "text",
                    placeholder: "Search topics, posts, authors...",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 16px;
                        min-width: 0;
                    ",
                    value: "{query_text}",
                    oninput: search_oninput,
                    onkeydown: search_onkeydown,
                    onfocus: search_onfocus,
                }
                if !query_text.read().is_empty() {
                    button {
                        style: "
                            border: none;
                            background: none;
                            cursor: pointer;
                            display: flex;
                            align-items: center;
                            padding: 2px;
                        ",
                        onclick: clear_search,
                        Icon { icon: MdClose, style: "width: 16px; height: 16px; color: #6B7280;" }
                    }
                }
                if enable_advanced_search {
                    FilterMenu {}
                }
                button {
                    style: "
                        border: none;
                        border-radius: 8px;
                        background-color: #1C212D;
                        color: white;
                        font-size: 14px;
                        padding: 7px 14px;
                        cursor: pointer;
                        flex-shrink: 0;
                    ",
                    onclick: move |_| {
                        submit_search(query_text.peek().clone());
                    },
                    "Search"
                }
            }

            SuggestionPanel {}
        }
    }
}
