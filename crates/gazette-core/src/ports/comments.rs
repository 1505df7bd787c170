use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, NewComment};
use crate::error::DomainError;

/// Comment store port.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Every comment, in insertion order.
    async fn all(&self) -> Vec<Comment>;

    /// Comments on the given post, oldest first. An unknown post ID
    /// yields an empty list.
    async fn for_post(&self, post_id: Uuid) -> Vec<Comment>;

    /// Create a comment. The referenced post is not checked to exist;
    /// dangling comments are tolerated and simply never listed under a
    /// live post.
    async fn create(&self, input: NewComment) -> Result<Comment, DomainError>;
}
