//! Common library exports shared across the BlogCommunity search client.

extern crate serde;


pub mod search_query;
pub mod search_filters;
pub mod search_const;
pub mod suggestion;
pub mod suggestion_engine;
pub mod recent_searches;
pub mod post_summary;
