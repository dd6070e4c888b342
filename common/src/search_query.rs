//! Shared search query models and helpers.

use serde::{Deserialize, Serialize};

use crate::search_filters::SearchFilters;


/// One submitted search: the free-text query plus the facet selection
/// active at submit time. The two axes are combined only here; suggestion
/// lookups never read the filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub query_string: String,
    pub filters: SearchFilters,
}

impl SearchQuery {
    pub fn from_text(query_string: impl Into<String>) -> Self {
        Self { query_string: query_string.into(), ..Default::default() }
    }
}
