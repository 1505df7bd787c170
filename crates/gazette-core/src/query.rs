//! Query engine - filter and sort composition over post snapshots.
//!
//! Everything here is pure: the store hands in a snapshot of enriched
//! posts and gets back the filtered, ordered subset. Lock handling and
//! slug resolution stay on the store side.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, Post, PostView, User};

/// Key a post listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    CreatedAt,
    #[default]
    PublishedAt,
    ViewCount,
    Title,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// A caller-facing query over the published post set. `category` holds a
/// category slug; resolving it to an id happens inside the store, where
/// the category collection lives.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub author: Option<Uuid>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

/// The resolved filter a [`PostQuery`] compiles down to. All present
/// predicates must hold for a post to pass.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category_id: Option<Uuid>,
    pub tag: Option<String>,
    pub author: Option<Uuid>,
    pub search: Option<String>,
}

/// The facet universe reported alongside a listing: every category, every
/// distinct tag across published posts, and every author with at least
/// one published post. Independent of whatever filter is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facets {
    pub categories: Vec<Category>,
    pub tags: Vec<String>,
    pub authors: Vec<User>,
}

/// Apply a resolved filter and sort to a snapshot of post views.
///
/// Unpublished posts are dropped first; the filter predicates are ANDed
/// on top. The sort is stable: entries equal under the key keep their
/// relative order from the input.
pub fn apply(
    posts: Vec<PostView>,
    filter: &PostFilter,
    sort_by: SortKey,
    sort_order: SortOrder,
) -> Vec<PostView> {
    let needle = filter.search.as_deref().map(str::to_lowercase);
    let mut posts: Vec<PostView> = posts
        .into_iter()
        .filter(|view| view.post.published && matches(&view.post, filter, needle.as_deref()))
        .collect();
    sort(&mut posts, sort_by, sort_order);
    posts
}

fn matches(post: &Post, filter: &PostFilter, needle: Option<&str>) -> bool {
    if let Some(category_id) = filter.category_id {
        if post.category_id != category_id {
            return false;
        }
    }
    if let Some(tag) = &filter.tag {
        // Tag matching is exact, including case.
        if !post.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    if let Some(author) = filter.author {
        if post.author_id != author {
            return false;
        }
    }
    if let Some(needle) = needle {
        if !matches_search(post, needle) {
            return false;
        }
    }
    true
}

/// Case-insensitive substring match against title, content, excerpt and
/// tags. No relevance scoring; results keep whatever order the caller
/// sorts by. The needle must already be lowercased.
pub fn matches_search(post: &Post, needle_lower: &str) -> bool {
    post.title.to_lowercase().contains(needle_lower)
        || post.content.to_lowercase().contains(needle_lower)
        || post.excerpt.to_lowercase().contains(needle_lower)
        || post
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle_lower))
}

/// Stable in-place sort by the requested key and direction.
pub fn sort(posts: &mut [PostView], key: SortKey, order: SortOrder) {
    posts.sort_by(|a, b| {
        let ordering = compare(&a.post, &b.post, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Post, b: &Post, key: SortKey) -> Ordering {
    match key {
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::PublishedAt => a.effective_published_at().cmp(&b.effective_published_at()),
        SortKey::ViewCount => a.view_count.cmp(&b.view_count),
        SortKey::Title => a.title.cmp(&b.title),
    }
}
