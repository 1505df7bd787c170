use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Category;

/// Category store port. Categories are fixed once the store is loaded,
/// so the surface is read-only.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Every category, in insertion order.
    async fn all(&self) -> Vec<Category>;

    /// Find a category by its unique ID.
    async fn get(&self, id: Uuid) -> Option<Category>;

    /// Find a category by its slug.
    async fn find_by_slug(&self, slug: &str) -> Option<Category>;
}
