//! Facet filter state for the search bar.
//!
//! Categories, authors and tags are independent multi-select sets; the date
//! and popularity axes are single-select and always hold exactly one of
//! their enumerated values.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};


/// A caller tried to set a single-select facet to a value outside its
/// enumerated set. Rejected at this boundary; state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFacetValue {
    pub facet: &'static str,
    pub value: String,
}

impl fmt::Display for InvalidFacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} filter value: {:?}", self.facet, self.value)
    }
}

impl std::error::Error for InvalidFacetValue {}


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum DateFilter {
    #[default]
    Any,
    Today,
    Week,
    Month,
    Year,
}

impl DateFilter {
    pub const ALL: [DateFilter; 5] = [
        DateFilter::Any,
        DateFilter::Today,
        DateFilter::Week,
        DateFilter::Month,
        DateFilter::Year,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            DateFilter::Any => "any",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
            DateFilter::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::Any => "Any time",
            DateFilter::Today => "Today",
            DateFilter::Week => "This week",
            DateFilter::Month => "This month",
            DateFilter::Year => "This year",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InvalidFacetValue> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.value() == value)
            .ok_or_else(|| InvalidFacetValue { facet: "date", value: value.to_string() })
    }

    /// Upper bound on post age for this bucket, in days. `Any` has no bound.
    pub fn max_age_days(&self) -> Option<u32> {
        match self {
            DateFilter::Any => None,
            DateFilter::Today => Some(1),
            DateFilter::Week => Some(7),
            DateFilter::Month => Some(31),
            DateFilter::Year => Some(366),
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum PopularityFilter {
    #[default]
    Any,
    MostViewed,
    MostLiked,
    MostCommented,
}

impl PopularityFilter {
    pub const ALL: [PopularityFilter; 4] = [
        PopularityFilter::Any,
        PopularityFilter::MostViewed,
        PopularityFilter::MostLiked,
        PopularityFilter::MostCommented,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            PopularityFilter::Any => "any",
            PopularityFilter::MostViewed => "views",
            PopularityFilter::MostLiked => "likes",
            PopularityFilter::MostCommented => "comments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PopularityFilter::Any => "Any",
            PopularityFilter::MostViewed => "Most viewed",
            PopularityFilter::MostLiked => "Most liked",
            PopularityFilter::MostCommented => "Most commented",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InvalidFacetValue> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.value() == value)
            .ok_or_else(|| InvalidFacetValue { facet: "popularity", value: value.to_string() })
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchFilters {
    pub categories: BTreeSet<String>,
    pub authors: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub date: DateFilter,
    pub popularity: PopularityFilter,
}

impl SearchFilters {
    pub fn toggle_category(&mut self, id: &str) {
        toggle(&mut self.categories, id);
    }

    pub fn toggle_author(&mut self, id: &str) {
        toggle(&mut self.authors, id);
    }

    pub fn toggle_tag(&mut self, id: &str) {
        toggle(&mut self.tags, id);
    }

    /// Validated single-select update; unknown values leave state unchanged.
    pub fn set_date(&mut self, value: &str) -> Result<(), InvalidFacetValue> {
        self.date = DateFilter::parse(value)?;
        Ok(())
    }

    pub fn set_popularity(&mut self, value: &str) -> Result<(), InvalidFacetValue> {
        self.popularity = PopularityFilter::parse(value)?;
        Ok(())
    }

    /// Derived on every call, never cached.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len()
            + self.authors.len()
            + self.tags.len()
            + usize::from(self.date != DateFilter::Any)
            + usize::from(self.popularity != PopularityFilter::Any)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut filters = SearchFilters::default();
        let before = filters.clone();

        filters.toggle_category("technology");
        assert!(filters.categories.contains("technology"));

        filters.toggle_category("technology");
        assert_eq!(filters, before);
    }

    #[test]
    fn active_count_matches_the_sum_formula() {
        let mut filters = SearchFilters::default();
        assert_eq!(filters.active_filter_count(), 0);

        filters.toggle_category("technology");
        filters.toggle_category("travel");
        filters.toggle_author("Sarah Chen");
        filters.toggle_tag("SEO");
        filters.set_date("week").unwrap();
        filters.set_popularity("likes").unwrap();
        assert_eq!(filters.active_filter_count(), 6);

        // single-select replacement does not stack
        filters.set_date("month").unwrap();
        assert_eq!(filters.active_filter_count(), 6);

        filters.set_date("any").unwrap();
        assert_eq!(filters.active_filter_count(), 5);

        filters.toggle_category("travel");
        assert_eq!(filters.active_filter_count(), 4);
    }

    #[test]
    fn unknown_date_value_is_rejected_without_mutation() {
        let mut filters = SearchFilters::default();
        filters.set_date("week").unwrap();

        let err = filters.set_date("decade").unwrap_err();
        assert_eq!(err.facet, "date");
        assert_eq!(err.value, "decade");
        assert_eq!(filters.date, DateFilter::Week);
    }

    #[test]
    fn unknown_popularity_value_is_rejected() {
        let mut filters = SearchFilters::default();
        assert!(filters.set_popularity("shares").is_err());
        assert_eq!(filters.popularity, PopularityFilter::Any);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filters = SearchFilters::default();
        filters.toggle_tag("AI");
        filters.set_popularity("views").unwrap();

        filters.reset();
        assert_eq!(filters, SearchFilters::default());
        assert_eq!(filters.active_filter_count(), 0);
    }

    #[test]
    fn every_enumerated_value_round_trips_through_parse() {
        for date in DateFilter::ALL {
            assert_eq!(DateFilter::parse(date.value()).unwrap(), date);
        }
        for popularity in PopularityFilter::ALL {
            assert_eq!(PopularityFilter::parse(popularity.value()).unwrap(), popularity);
        }
    }
}
