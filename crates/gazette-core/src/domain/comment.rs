use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - reader feedback attached to a post. `parent_id`
/// points at another comment when the comment is a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_name: String,
    pub author_email: String,
    pub post_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with generated ID and timestamps.
    pub fn new(input: NewComment) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            content: input.content,
            author_name: input.author_name,
            author_email: input.author_email,
            post_id: input.post_id,
            parent_id: input.parent_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for creating a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub author_name: String,
    pub author_email: String,
    pub post_id: Uuid,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}
