//! Post summary model for search result listings.

use serde::{Deserialize, Serialize};

use crate::search_filters::SearchFilters;


/// The slice of a post the result list renders. Filtering by facet happens
/// here, on the host side, after submission; the suggestion engine never
/// sees the filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time_minutes: u32,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub age_days: u32,
    pub trending: bool,
}

impl PostSummary {
    /// Category identifiers are the lowercased display names.
    pub fn category_id(&self) -> String {
        self.category.to_lowercase()
    }

    /// Case-insensitive substring match over title, excerpt, author and
    /// tags. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.excerpt.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Facet axes intersect; selections within one axis are alternatives.
    pub fn matches_filters(&self, filters: &SearchFilters) -> bool {
        if !filters.categories.is_empty() && !filters.categories.contains(&self.category_id()) {
            return false;
        }
        if !filters.authors.is_empty() && !filters.authors.contains(&self.author) {
            return false;
        }
        if !filters.tags.is_empty() && !self.tags.iter().any(|tag| filters.tags.contains(tag)) {
            return false;
        }
        if let Some(max_age) = filters.date.max_age_days() {
            if self.age_days > max_age {
                return false;
            }
        }
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> PostSummary {
        PostSummary {
            id: "post-1".to_string(),
            title: "The Future of Artificial Intelligence in Web Development".to_string(),
            excerpt: "Exploring how AI is revolutionizing the web.".to_string(),
            author: "Sarah Chen".to_string(),
            category: "Technology".to_string(),
            tags: vec!["AI".to_string(), "SEO".to_string()],
            read_time_minutes: 8,
            views: 2340,
            likes: 156,
            comments: 42,
            age_days: 3,
            trending: true,
        }
    }

    #[test]
    fn query_matches_title_and_author_case_insensitively() {
        assert!(post().matches_query("artificial intelligence"));
        assert!(post().matches_query("sarah"));
        assert!(post().matches_query(""));
        assert!(!post().matches_query("gardening"));
    }

    #[test]
    fn empty_filters_match_everything() {
        assert!(post().matches_filters(&SearchFilters::default()));
    }

    #[test]
    fn category_axis_uses_lowercased_ids() {
        let mut filters = SearchFilters::default();
        filters.toggle_category("technology");
        assert!(post().matches_filters(&filters));

        filters.toggle_category("technology");
        filters.toggle_category("travel");
        assert!(!post().matches_filters(&filters));
    }

    #[test]
    fn axes_intersect_while_one_axis_is_alternatives() {
        let mut filters = SearchFilters::default();
        filters.toggle_category("technology");
        filters.toggle_category("travel");
        filters.toggle_tag("AI");
        assert!(post().matches_filters(&filters));

        filters.toggle_author("Marcus Rodriguez");
        assert!(!post().matches_filters(&filters));
    }

    #[test]
    fn date_bucket_bounds_post_age() {
        let mut filters = SearchFilters::default();
        filters.set_date("week").unwrap();
        assert!(post().matches_filters(&filters));

        filters.set_date("today").unwrap();
        assert!(!post().matches_filters(&filters));
    }
}
