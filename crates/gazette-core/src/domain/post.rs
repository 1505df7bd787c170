use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::user::User;

/// Post entity - a blog article, draft or published.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub tags: Vec<String>,
    pub published: bool,
    /// Set exactly once, when the post first becomes published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: u64,
}

impl Post {
    /// Create a new post from a draft, with the slug already decided.
    pub fn new(draft: NewPost, slug: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            slug,
            content: draft.content,
            excerpt: draft.excerpt,
            cover_image: draft.cover_image,
            author_id: draft.author_id,
            category_id: draft.category_id,
            tags: draft.tags,
            published: draft.published,
            published_at: draft.published.then_some(now),
            created_at: now,
            updated_at: now,
            view_count: 0,
        }
    }

    /// The timestamp listings order by: publication time, falling back to
    /// creation time for posts that never had one.
    pub fn effective_published_at(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }
}

/// Input for creating a post. When `slug` is absent one is derived from
/// the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub author_id: Uuid,
    pub category_id: Uuid,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Partial update for a post. Absent fields are left untouched; the id,
/// slug, author and creation timestamp are not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub published: Option<bool>,
}

/// Enriched read model: a post snapshot with its author and category
/// resolved inline. Resolution is best-effort; a dangling reference
/// leaves the field empty instead of failing the read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}
