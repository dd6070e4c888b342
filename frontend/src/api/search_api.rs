//! Client API calls for suggestion and post lookups.
//!
//! Both endpoints are backed by static catalogs behind an artificial
//! delay so the UI sees the same latency profile as the hosted service.
//! Results resolve out of order under fast typing, which is why callers
//! guard every application with a sequence ticket.

use common::post_summary::PostSummary;
use common::search_const::SIMULATED_LATENCY_MS;
use common::search_filters::PopularityFilter;
use common::search_query::SearchQuery;
use common::suggestion::{StaticCatalog, Suggestion, SuggestionKind, SuggestionMetadata};
use common::suggestion_engine::build_suggestions;
use gloo_timers::future::TimeoutFuture;


/// Suggestion pass for one debounced or submitted query. Journal matches
/// are merged in ahead of catalog matches by the engine.
pub async fn fetch_suggestions(query: String, recent_searches: Vec<String>) -> Vec<Suggestion> {
    TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
    build_suggestions(&query, &recent_searches, &suggestion_catalog())
}

/// Post lookup for the results page. Facet filtering happens here, after
/// submission; the suggestion pass never reads the filters.
pub async fn fetch_posts(query: SearchQuery) -> Vec<PostSummary> {
    TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
    let mut posts: Vec<PostSummary> = post_catalog()
        .into_iter()
        .filter(|post| post.matches_query(&query.query_string))
        .filter(|post| post.matches_filters(&query.filters))
        .collect();
    match query.filters.popularity {
        PopularityFilter::Any => posts.sort_by_key(|post| post.age_days),
        PopularityFilter::MostViewed => posts.sort_by_key(|post| std::cmp::Reverse(post.views)),
        PopularityFilter::MostLiked => posts.sort_by_key(|post| std::cmp::Reverse(post.likes)),
        PopularityFilter::MostCommented => {
            posts.sort_by_key(|post| std::cmp::Reverse(post.comments))
        }
    }
    posts
}

fn trending() -> SuggestionMetadata {
    SuggestionMetadata { trending: true, ..Default::default() }
}

fn post_metadata(views: u64, author: &str) -> SuggestionMetadata {
    SuggestionMetadata { views: Some(views), trending: false, author: Some(author.to_string()) }
}

fn suggestion_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        Suggestion::new("1", "community blog tips", SuggestionKind::Query)
            .with_metadata(trending()),
        Suggestion::new("2", "The Future of AI in Web Development", SuggestionKind::Post)
            .with_category("Technology")
            .with_metadata(post_metadata(2340, "Sarah Chen")),
        Suggestion::new("3", "how to write engaging content", SuggestionKind::Query),
        Suggestion::new("4", "Sarah Chen", SuggestionKind::Author).with_metadata(trending()),
        Suggestion::new("5", "best blogging platforms", SuggestionKind::Query),
        Suggestion::new("6", "content creation strategies", SuggestionKind::Query),
        Suggestion::new("7", "Marcus Rodriguez", SuggestionKind::Author),
        Suggestion::new("8", "Hidden Gems: Southeast Asia Travel", SuggestionKind::Post)
            .with_category("Travel")
            .with_metadata(post_metadata(1890, "Marcus Rodriguez")),
        Suggestion::new("9", "growing your blog audience", SuggestionKind::Query),
        Suggestion::new("10", "blog monetization", SuggestionKind::Query),
        Suggestion::new("11", "SEO", SuggestionKind::Tag).with_metadata(trending()),
        Suggestion::new("12", "photography for blog posts", SuggestionKind::Query),
        Suggestion::new("13", "Dr. Emily Watson", SuggestionKind::Author),
        Suggestion::new("14", "mindfulness", SuggestionKind::Tag),
        Suggestion::new("15", "Plant-Based Cooking for Beginners", SuggestionKind::Post)
            .with_category("Food")
            .with_metadata(post_metadata(987, "Chef Maria Santos")),
    ])
}

fn post_catalog() -> Vec<PostSummary> {
    vec![
        PostSummary {
            id: "post-1".to_string(),
            title: "The Future of Artificial Intelligence in Web Development".to_string(),
            excerpt: "Exploring how AI is revolutionizing the way we build and interact with \
                      web applications, from automated code generation to intelligent user \
                      experiences."
                .to_string(),
            author: "Sarah Chen".to_string(),
            category: "Technology".to_string(),
            tags: vec!["AI".to_string(), "SEO".to_string()],
            read_time_minutes: 8,
            views: 2340,
            likes: 156,
            comments: 48,
            age_days: 2,
            trending: true,
        },
        PostSummary {
            id: "post-2".to_string(),
            title: "Hidden Gems: 10 Unexplored Destinations in Southeast Asia".to_string(),
            excerpt: "Discover breathtaking locations off the beaten path that offer authentic \
                      cultural experiences and stunning natural beauty."
                .to_string(),
            author: "Marcus Rodriguez".to_string(),
            category: "Travel".to_string(),
            tags: vec!["Photography".to_string()],
            read_time_minutes: 12,
            views: 1890,
            likes: 203,
            comments: 61,
            age_days: 3,
            trending: true,
        },
        PostSummary {
            id: "post-3".to_string(),
            title: "Mindful Fitness: Integrating Mental Health with Physical Wellness".to_string(),
            excerpt: "How combining mindfulness practices with your fitness routine can enhance \
                      both physical performance and mental well-being."
                .to_string(),
            author: "Dr. Emily Watson".to_string(),
            category: "Fitness".to_string(),
            tags: vec!["Mindfulness".to_string()],
            read_time_minutes: 6,
            views: 1456,
            likes: 89,
            comments: 17,
            age_days: 4,
            trending: false,
        },
        PostSummary {
            id: "post-4".to_string(),
            title: "Plant-Based Cooking: Delicious Recipes for Beginners".to_string(),
            excerpt: "Start your plant-based journey with these easy, nutritious recipes that \
                      do not sacrifice flavor or satisfaction."
                .to_string(),
            author: "Chef Maria Santos".to_string(),
            category: "Food".to_string(),
            tags: vec!["Photography".to_string()],
            read_time_minutes: 10,
            views: 987,
            likes: 67,
            comments: 12,
            age_days: 5,
            trending: false,
        },
        PostSummary {
            id: "post-5".to_string(),
            title: "Digital Art Revolution: NFTs and Creative Expression".to_string(),
            excerpt: "Exploring how blockchain technology is transforming the art world and \
                      creating new opportunities for digital artists."
                .to_string(),
            author: "Alex Kim".to_string(),
            category: "Art".to_string(),
            tags: vec!["Monetization".to_string()],
            read_time_minutes: 7,
            views: 1234,
            likes: 98,
            comments: 23,
            age_days: 9,
            trending: false,
        },
        PostSummary {
            id: "post-6".to_string(),
            title: "Growing Your Blog Audience: A Monetization Playbook".to_string(),
            excerpt: "From newsletters to sponsorships, a practical look at turning a steady \
                      readership into a sustainable income."
                .to_string(),
            author: "Sarah Chen".to_string(),
            category: "Technology".to_string(),
            tags: vec!["Monetization".to_string(), "SEO".to_string()],
            read_time_minutes: 9,
            views: 1678,
            likes: 134,
            comments: 35,
            age_days: 40,
            trending: false,
        },
    ]
}
