//! Search bar, suggestion panel, filter menu and result cards.

pub mod search_bar;
pub mod suggestion_list;
pub mod filter_menu;
pub mod post_card;
