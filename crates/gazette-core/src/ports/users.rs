use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserPatch};
use crate::error::DomainError;

/// User store port.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user, in insertion order.
    async fn all(&self) -> Vec<User>;

    /// Find a user by their unique ID.
    async fn get(&self, id: Uuid) -> Option<User>;

    /// Create a user.
    async fn create(&self, input: NewUser) -> Result<User, DomainError>;

    /// Merge the provided fields into an existing user.
    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError>;

    /// Remove a user. Returns false for an unknown ID instead of
    /// erroring. Posts by the removed author are kept; their views
    /// simply resolve without an author.
    async fn delete(&self, id: Uuid) -> bool;
}
