//! In-memory content store.
//!
//! The store owns every entity collection behind one async `RwLock`.
//! Mutations and the view-count bump serialize through the write lock;
//! reads clone a consistent snapshot under the read lock, so a query
//! never observes a half-applied mutation. Note: data is lost on process
//! restart.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use gazette_core::DomainError;
use gazette_core::domain::{
    Category, Comment, NewComment, NewPost, NewUser, Post, PostPatch, PostView, User, UserPatch,
};
use gazette_core::ports::{CategoryStore, CommentStore, PostStore, StatsSource, UserStore};
use gazette_core::query::{self, Facets, PostFilter, PostQuery, SortKey, SortOrder};
use gazette_core::stats::{STATS_SAMPLE, SiteStats};
use gazette_core::text::slugify;

use crate::seed::{SeedData, demo_content};

/// In-memory content store backing the whole API.
pub struct MemoryContentStore {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    users: Vec<User>,
    categories: Vec<Category>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    // Secondary post indexes, kept in lockstep with `posts`.
    posts_by_id: HashMap<Uuid, usize>,
    posts_by_slug: HashMap<String, usize>,
}

impl MemoryContentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// A store preloaded with the given content. Post slugs are assumed
    /// unique; on collision the later post wins the slug index.
    pub fn with_data(data: SeedData) -> Self {
        let mut inner = StoreInner {
            users: data.users,
            categories: data.categories,
            posts: data.posts,
            comments: data.comments,
            posts_by_id: HashMap::new(),
            posts_by_slug: HashMap::new(),
        };
        inner.reindex();

        tracing::info!(
            users = inner.users.len(),
            categories = inner.categories.len(),
            posts = inner.posts.len(),
            comments = inner.comments.len(),
            "Content store loaded"
        );

        Self {
            inner: RwLock::new(inner),
        }
    }

    /// A store preloaded with the demo content set.
    pub fn demo() -> Self {
        Self::with_data(demo_content())
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    fn reindex(&mut self) {
        self.posts_by_id = self
            .posts
            .iter()
            .enumerate()
            .map(|(index, post)| (post.id, index))
            .collect();
        self.posts_by_slug = self
            .posts
            .iter()
            .enumerate()
            .map(|(index, post)| (post.slug.clone(), index))
            .collect();
    }

    /// Attach author and category to a post record. Dangling references
    /// resolve to `None` rather than failing the read.
    fn resolve(&self, post: &Post) -> PostView {
        PostView {
            post: post.clone(),
            author: self
                .users
                .iter()
                .find(|user| user.id == post.author_id)
                .cloned(),
            category: self
                .categories
                .iter()
                .find(|category| category.id == post.category_id)
                .cloned(),
        }
    }

    /// Published posts in insertion order, resolved.
    fn published_views(&self) -> Vec<PostView> {
        self.posts
            .iter()
            .filter(|post| post.published)
            .map(|post| self.resolve(post))
            .collect()
    }

    fn newest_first(mut views: Vec<PostView>) -> Vec<PostView> {
        query::sort(&mut views, SortKey::PublishedAt, SortOrder::Desc);
        views
    }

    /// Distinct tags across published posts, sorted alphabetically.
    fn distinct_tags(&self) -> Vec<String> {
        self.posts
            .iter()
            .filter(|post| post.published)
            .flat_map(|post| post.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[async_trait]
impl PostStore for MemoryContentStore {
    async fn all(&self) -> Vec<PostView> {
        let inner = self.inner.read().await;
        inner.posts.iter().map(|post| inner.resolve(post)).collect()
    }

    async fn published(&self) -> Vec<PostView> {
        let inner = self.inner.read().await;
        StoreInner::newest_first(inner.published_views())
    }

    async fn get(&self, id: Uuid) -> Option<PostView> {
        let inner = self.inner.read().await;
        inner
            .posts_by_id
            .get(&id)
            .map(|&index| inner.resolve(&inner.posts[index]))
    }

    async fn find_by_slug(&self, slug: &str) -> Option<PostView> {
        let inner = self.inner.read().await;
        inner
            .posts_by_slug
            .get(slug)
            .map(|&index| inner.resolve(&inner.posts[index]))
    }

    async fn fetch_for_display(&self, slug: &str) -> Option<PostView> {
        let mut inner = self.inner.write().await;
        let index = *inner.posts_by_slug.get(slug)?;

        inner.posts[index].view_count += 1;
        tracing::debug!(
            slug = %slug,
            view_count = inner.posts[index].view_count,
            "Post fetched for display"
        );

        Some(inner.resolve(&inner.posts[index]))
    }

    async fn by_category(&self, category_id: Uuid) -> Vec<PostView> {
        let inner = self.inner.read().await;
        inner
            .posts
            .iter()
            .filter(|post| post.published && post.category_id == category_id)
            .map(|post| inner.resolve(post))
            .collect()
    }

    async fn by_tag(&self, tag: &str) -> Vec<PostView> {
        let inner = self.inner.read().await;
        inner
            .posts
            .iter()
            .filter(|post| post.published && post.tags.iter().any(|t| t == tag))
            .map(|post| inner.resolve(post))
            .collect()
    }

    async fn by_author(&self, author_id: Uuid) -> Vec<PostView> {
        let inner = self.inner.read().await;
        inner
            .posts
            .iter()
            .filter(|post| post.published && post.author_id == author_id)
            .map(|post| inner.resolve(post))
            .collect()
    }

    async fn search(&self, term: &str) -> Vec<PostView> {
        let needle = term.to_lowercase();
        let inner = self.inner.read().await;
        inner
            .posts
            .iter()
            .filter(|post| post.published && query::matches_search(post, &needle))
            .map(|post| inner.resolve(post))
            .collect()
    }

    async fn popular(&self, limit: usize) -> Vec<PostView> {
        let inner = self.inner.read().await;
        let mut views = inner.published_views();
        query::sort(&mut views, SortKey::ViewCount, SortOrder::Desc);
        views.truncate(limit);
        views
    }

    async fn recent(&self, limit: usize) -> Vec<PostView> {
        let inner = self.inner.read().await;
        let mut views = StoreInner::newest_first(inner.published_views());
        views.truncate(limit);
        views
    }

    async fn query(&self, query: &PostQuery) -> Vec<PostView> {
        let inner = self.inner.read().await;

        // An unknown category slug applies no category filter; the
        // published set falls through unfiltered.
        let category_id = query.category.as_deref().and_then(|slug| {
            inner
                .categories
                .iter()
                .find(|category| category.slug == slug)
                .map(|category| category.id)
        });
        let filter = PostFilter {
            category_id,
            tag: query.tag.clone(),
            author: query.author,
            search: query.search.clone(),
        };

        // Filtering and sorting run on the snapshot, outside the lock.
        let views = inner.published_views();
        drop(inner);
        query::apply(views, &filter, query.sort_by, query.sort_order)
    }

    async fn create(&self, draft: NewPost) -> Result<PostView, DomainError> {
        let mut inner = self.inner.write().await;

        let slug = match &draft.slug {
            Some(slug) => slug.clone(),
            None => slugify(&draft.title),
        };
        if slug.is_empty() {
            return Err(DomainError::Validation(
                "post slug must not be empty".to_string(),
            ));
        }
        if inner.posts_by_slug.contains_key(&slug) {
            return Err(DomainError::Duplicate(format!(
                "post slug '{slug}' already exists"
            )));
        }

        let post = Post::new(draft, slug);
        tracing::debug!(id = %post.id, slug = %post.slug, "Post created");

        let index = inner.posts.len();
        inner.posts_by_id.insert(post.id, index);
        inner.posts_by_slug.insert(post.slug.clone(), index);
        let view = inner.resolve(&post);
        inner.posts.push(post);
        Ok(view)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<PostView, DomainError> {
        let mut inner = self.inner.write().await;
        let Some(&index) = inner.posts_by_id.get(&id) else {
            return Err(DomainError::NotFound { entity: "post", id });
        };

        // Check the publish transition before touching anything, so a
        // rejected patch leaves the post fully unchanged.
        if patch.published == Some(false) && inner.posts[index].published {
            return Err(DomainError::Validation(
                "a published post cannot be reverted to draft".to_string(),
            ));
        }

        let now = Utc::now();
        let post = &mut inner.posts[index];
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(cover_image) = patch.cover_image {
            post.cover_image = Some(cover_image);
        }
        if let Some(category_id) = patch.category_id {
            post.category_id = category_id;
        }
        if let Some(tags) = patch.tags {
            post.tags = tags;
        }
        if patch.published == Some(true) && !post.published {
            post.published = true;
            post.published_at = Some(now);
        }
        post.updated_at = now;
        tracing::debug!(id = %post.id, slug = %post.slug, "Post updated");

        Ok(inner.resolve(&inner.posts[index]))
    }

    async fn delete(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let Some(&index) = inner.posts_by_id.get(&id) else {
            return false;
        };

        let removed = inner.posts.remove(index);
        // Removal shifts every later index, so rebuild both maps.
        inner.reindex();
        tracing::debug!(id = %removed.id, slug = %removed.slug, "Post deleted");
        true
    }

    async fn tags(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        inner.distinct_tags()
    }

    async fn facets(&self) -> Facets {
        let inner = self.inner.read().await;

        let mut authors: Vec<User> = Vec::new();
        for view in StoreInner::newest_first(inner.published_views()) {
            if let Some(author) = view.author {
                if !authors.iter().any(|known| known.id == author.id) {
                    authors.push(author);
                }
            }
        }

        Facets {
            categories: inner.categories.clone(),
            tags: inner.distinct_tags(),
            authors,
        }
    }
}

#[async_trait]
impl CategoryStore for MemoryContentStore {
    async fn all(&self) -> Vec<Category> {
        let inner = self.inner.read().await;
        inner.categories.clone()
    }

    async fn get(&self, id: Uuid) -> Option<Category> {
        let inner = self.inner.read().await;
        inner
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
    }

    async fn find_by_slug(&self, slug: &str) -> Option<Category> {
        let inner = self.inner.read().await;
        inner
            .categories
            .iter()
            .find(|category| category.slug == slug)
            .cloned()
    }
}

#[async_trait]
impl UserStore for MemoryContentStore {
    async fn all(&self) -> Vec<User> {
        let inner = self.inner.read().await;
        inner.users.clone()
    }

    async fn get(&self, id: Uuid) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|user| user.id == id).cloned()
    }

    async fn create(&self, input: NewUser) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;
        let user = User::new(input);
        tracing::debug!(id = %user.id, "User created");
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.iter_mut().find(|user| user.id == id) else {
            return Err(DomainError::NotFound { entity: "user", id });
        };

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(bio) = patch.bio {
            user.bio = Some(bio);
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.users.len();
        inner.users.retain(|user| user.id != id);
        inner.users.len() < before
    }
}

#[async_trait]
impl CommentStore for MemoryContentStore {
    async fn all(&self) -> Vec<Comment> {
        let inner = self.inner.read().await;
        inner.comments.clone()
    }

    async fn for_post(&self, post_id: Uuid) -> Vec<Comment> {
        let inner = self.inner.read().await;
        let mut comments: Vec<Comment> = inner
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| comment.created_at);
        comments
    }

    async fn create(&self, input: NewComment) -> Result<Comment, DomainError> {
        let mut inner = self.inner.write().await;
        let comment = Comment::new(input);
        tracing::debug!(id = %comment.id, post_id = %comment.post_id, "Comment created");
        inner.comments.push(comment.clone());
        Ok(comment)
    }
}

#[async_trait]
impl StatsSource for MemoryContentStore {
    async fn stats(&self) -> SiteStats {
        let inner = self.inner.read().await;

        let mut popular = inner.published_views();
        query::sort(&mut popular, SortKey::ViewCount, SortOrder::Desc);
        popular.truncate(STATS_SAMPLE);

        let mut recent = StoreInner::newest_first(inner.published_views());
        recent.truncate(STATS_SAMPLE);

        SiteStats {
            total_posts: inner.posts.iter().filter(|post| post.published).count(),
            total_users: inner.users.len(),
            total_categories: inner.categories.len(),
            total_views: inner.posts.iter().map(|post| post.view_count).sum(),
            popular_posts: popular,
            recent_posts: recent,
        }
    }
}
