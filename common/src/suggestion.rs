//! Suggestion model and catalog capability.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionKind {
    Query,
    Post,
    Author,
    Tag,
}

impl SuggestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Query => "query",
            SuggestionKind::Post => "post",
            SuggestionKind::Author => "author",
            SuggestionKind::Tag => "tag",
        }
    }
}


/// Only meaningful for `Post` entries, except `trending` which any kind
/// may carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SuggestionMetadata {
    pub views: Option<u64>,
    pub trending: bool,
    pub author: Option<String>,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    pub kind: SuggestionKind,
    pub category: Option<String>,
    pub metadata: Option<SuggestionMetadata>,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            category: None,
            metadata: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_metadata(mut self, metadata: SuggestionMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_trending(&self) -> bool {
        self.metadata.as_ref().map(|m| m.trending).unwrap_or(false)
    }
}


/// Where suggestion candidates come from. The engine only requires this
/// capability, so hosts can swap the static catalog for a live source.
pub trait SuggestionCatalog {
    /// Candidates whose text contains `query`, case-insensitively, in
    /// catalog order.
    fn lookup(&self, query: &str) -> Vec<Suggestion>;
}


/// Fixed in-memory catalog supplied at construction time.
pub struct StaticCatalog {
    entries: Vec<Suggestion>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<Suggestion>) -> Self {
        Self { entries }
    }
}

impl SuggestionCatalog for StaticCatalog {
    fn lookup(&self, query: &str) -> Vec<Suggestion> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            Suggestion::new("1", "community blog tips", SuggestionKind::Query),
            Suggestion::new("2", "The Future of AI in Web Development", SuggestionKind::Post)
                .with_category("Technology"),
            Suggestion::new("3", "Sarah Chen", SuggestionKind::Author),
        ])
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let matches = catalog().lookup("FUTURE OF ai");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "2");
    }

    #[test]
    fn lookup_preserves_catalog_order() {
        let matches = catalog().lookup("e");
        let ids: Vec<&str> = matches.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn lookup_with_no_match_is_empty() {
        assert!(catalog().lookup("quantum").is_empty());
    }
}
