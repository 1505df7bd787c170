use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, PostPatch, PostView};
use crate::error::DomainError;
use crate::query::{Facets, PostQuery};

/// Post store port. Every read returns enriched [`PostView`] snapshots
/// with author and category resolved; callers never see raw records.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every post, drafts included, in insertion order.
    async fn all(&self) -> Vec<PostView>;

    /// Published posts only, newest publication first.
    async fn published(&self) -> Vec<PostView>;

    /// Find a post by its unique ID.
    async fn get(&self, id: Uuid) -> Option<PostView>;

    /// Find a post by slug without touching its view count. The public
    /// display path is [`Self::fetch_for_display`].
    async fn find_by_slug(&self, slug: &str) -> Option<PostView>;

    /// Fetch a post by slug for public display, bumping its view count
    /// by exactly one. The only read with a side effect; it counts draft
    /// views too, since existence is established before publication is
    /// checked by callers.
    async fn fetch_for_display(&self, slug: &str) -> Option<PostView>;

    /// Published posts in the given category, in insertion order.
    async fn by_category(&self, category_id: Uuid) -> Vec<PostView>;

    /// Published posts carrying the given tag (exact match), in
    /// insertion order.
    async fn by_tag(&self, tag: &str) -> Vec<PostView>;

    /// Published posts by the given author, in insertion order.
    async fn by_author(&self, author_id: Uuid) -> Vec<PostView>;

    /// Published posts matching a case-insensitive substring search over
    /// title, content, excerpt and tags, in insertion order.
    async fn search(&self, term: &str) -> Vec<PostView>;

    /// The most viewed published posts, capped at `limit`.
    async fn popular(&self, limit: usize) -> Vec<PostView>;

    /// The most recently published posts, capped at `limit`.
    async fn recent(&self, limit: usize) -> Vec<PostView>;

    /// Run a composed query: resolve the category slug, apply all
    /// filters, sort. An unknown category slug applies no category
    /// filter at all.
    async fn query(&self, query: &PostQuery) -> Vec<PostView>;

    /// Create a post. Derives a slug from the title when none is given
    /// and rejects slugs that are empty or already taken.
    async fn create(&self, draft: NewPost) -> Result<PostView, DomainError>;

    /// Merge the provided fields into an existing post. Publishing a
    /// draft stamps `published_at` once; unpublishing is rejected.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<PostView, DomainError>;

    /// Remove a post. Returns false for an unknown ID instead of
    /// erroring.
    async fn delete(&self, id: Uuid) -> bool;

    /// Every distinct tag across published posts, sorted alphabetically.
    async fn tags(&self) -> Vec<String>;

    /// The facet universe for listings.
    async fn facets(&self) -> Facets;
}
