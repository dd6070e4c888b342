//! Suggestion assembly and in-flight lookup sequencing.

use crate::search_const::SUGGESTION_LIMIT;
use crate::suggestion::{Suggestion, SuggestionCatalog, SuggestionKind};


/// Builds the ordered suggestion list for a query: journal matches first,
/// in recency order, then catalog matches in catalog order, capped at
/// [`SUGGESTION_LIMIT`]. There is no scoring beyond substring containment.
pub fn build_suggestions(
    query: &str,
    recent_searches: &[String],
    catalog: &dyn SuggestionCatalog,
) -> Vec<Suggestion> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let needle = trimmed.to_lowercase();
    let mut combined: Vec<Suggestion> = recent_searches
        .iter()
        .filter(|recent| recent.to_lowercase().contains(&needle))
        .enumerate()
        .map(|(index, recent)| {
            Suggestion::new(format!("recent-{index}"), recent.clone(), SuggestionKind::Query)
        })
        .collect();
    combined.extend(catalog.lookup(trimmed));
    combined.truncate(SUGGESTION_LIMIT);
    combined
}


/// Tickets for lookups that resolve later. Each initiation takes a new
/// ticket; only the holder of the latest ticket may apply its result, so a
/// slow early lookup can never overwrite a fast later one.
#[derive(Debug, Default)]
pub struct SearchSequence {
    latest: u64,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new lookup and invalidates every ticket handed out
    /// before it.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::{StaticCatalog, SuggestionMetadata};

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            Suggestion::new("1", "community blog tips", SuggestionKind::Query).with_metadata(
                SuggestionMetadata { trending: true, ..Default::default() },
            ),
            Suggestion::new("p1", "Getting Started with React Hooks", SuggestionKind::Post)
                .with_category("Technology"),
            Suggestion::new("3", "how to write engaging content", SuggestionKind::Query),
            Suggestion::new("4", "Sarah Chen", SuggestionKind::Author),
            Suggestion::new("5", "best blogging platforms", SuggestionKind::Query),
            Suggestion::new("6", "content creation strategies", SuggestionKind::Query),
            Suggestion::new("7", "blog monetization", SuggestionKind::Query),
            Suggestion::new("8", "growing your blog audience", SuggestionKind::Query),
            Suggestion::new("9", "photography for blog posts", SuggestionKind::Query),
            Suggestion::new("10", "blog SEO checklist", SuggestionKind::Query),
        ])
    }

    #[test]
    fn empty_query_yields_no_suggestions() {
        let recents = vec!["blog tips".to_string()];
        assert!(build_suggestions("", &recents, &catalog()).is_empty());
        assert!(build_suggestions("   ", &recents, &catalog()).is_empty());
    }

    #[test]
    fn recent_matches_come_first_in_recency_order() {
        let recents = vec!["blog growth".to_string(), "blog seo".to_string()];
        let suggestions = build_suggestions("blog", &recents, &catalog());

        assert_eq!(suggestions[0].text, "blog growth");
        assert_eq!(suggestions[0].kind, SuggestionKind::Query);
        assert_eq!(suggestions[1].text, "blog seo");
        // catalog matches follow in catalog order
        assert_eq!(suggestions[2].text, "community blog tips");
    }

    #[test]
    fn combined_list_is_capped() {
        let recents = vec!["blog growth".to_string(), "blog seo".to_string()];
        let suggestions = build_suggestions("blog", &recents, &catalog());
        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn matching_is_case_insensitive_across_sources() {
        let recents = vec!["React state patterns".to_string()];
        let suggestions = build_suggestions("react hooks", &recents, &catalog());
        // only the catalog post matches the full phrase
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "p1");
        assert_eq!(suggestions[0].text, "Getting Started with React Hooks");
    }

    #[test]
    fn non_matching_query_yields_empty_list() {
        assert!(build_suggestions("zzzz", &[], &catalog()).is_empty());
    }

    #[test]
    fn later_initiated_lookup_wins_regardless_of_resolution_order() {
        let mut sequence = SearchSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();

        // the second lookup resolves first and is applied
        assert!(sequence.is_current(second));
        // the first resolves afterwards and must be dropped
        assert!(!sequence.is_current(first));
    }

    #[test]
    fn rapid_keystrokes_leave_exactly_one_live_ticket() {
        let mut sequence = SearchSequence::new();
        let tickets: Vec<u64> = (0..5).map(|_| sequence.begin()).collect();

        let live: Vec<&u64> = tickets.iter().filter(|t| sequence.is_current(**t)).collect();
        assert_eq!(live, [tickets.last().unwrap()]);
    }
}
