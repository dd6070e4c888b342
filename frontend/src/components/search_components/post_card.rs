//! Result card for one post.

use dioxus::prelude::*;

use common::post_summary::PostSummary;

use crate::components::search_components::suggestion_list::TrendingBadge;


#[component]
pub fn PostResultCard(post: PostSummary) -> Element {
    rsx! {
        div {
            class: "x-post-result-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 7px;
                background-color: white;
                border: 1px solid #AAAAAA33;
                border-radius: 8px;
                padding: 14px 16px;
                margin: 8px 0;
                width: 100%;
            ",

            // Row 1: category chip, trending badge, spacer, read time
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    width: 100%;
                ",
                CategoryChip { category: post.category.clone() }
                if post.trending {
                    TrendingBadge {}
                }
                div { style: "flex: 1 1 auto;" }
                span {
                    style: "font-size: 13px; color: #6B7280; flex-shrink: 0;",
                    "{post.read_time_minutes} min read"
                }
            }

            // Row 2: title
            div {
                style: "
                    font-size: 19px;
                    line-height: 26px;
                    font-weight: 600;
                    color: #111827;
                ",
                "{post.title}"
            }

            // Row 3: excerpt, clamped
            div {
                style: "
                    font-size: 14px;
                    line-height: 21px;
                    color: #374151;
                    overflow: hidden;
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                ",
                "{post.excerpt}"
            }

            // Row 4: author and engagement counters
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    font-size: 13px;
                    color: #6B7280;
                ",
                span { style: "font-weight: 500; color: #111827;", "{post.author}" }
                span { "{post.views} views" }
                span { "{post.likes} likes" }
                span { "{post.comments} comments" }
                div { style: "flex: 1 1 auto;" }
                for tag in post.tags.iter() {
                    TagChip { tag: tag.clone() }
                }
            }
        }
    }
}

#[component]
fn CategoryChip(category: String) -> Element {
    rsx! {
        span {
            style: "
                font-size: 12px;
                color: #1C212D;
                background-color: #ECEEF2;
                border-radius: 9999px;
                padding: 2px 10px;
                flex-shrink: 0;
            ",
            "{category}"
        }
    }
}

#[component]
fn TagChip(tag: String) -> Element {
    rsx! {
        span {
            style: "
                font-size: 12px;
                color: #6B7280;
                border: 1px solid #E5E7EB;
                border-radius: 9999px;
                padding: 1px 8px;
                flex-shrink: 0;
            ",
            "#{tag}"
        }
    }
}
