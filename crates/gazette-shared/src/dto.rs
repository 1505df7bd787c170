//! Data Transfer Objects - request parameter types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gazette_core::query::{PostQuery, SortKey, SortOrder};

/// Query parameters accepted by the post listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostListParams {
    pub query: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub author: Option<Uuid>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
}

impl PostListParams {
    /// Build the store query. Empty strings count as absent filters, the
    /// same as leaving the parameter off entirely.
    pub fn into_query(self) -> PostQuery {
        PostQuery {
            search: self.query.filter(|s| !s.is_empty()),
            category: self.category.filter(|s| !s.is_empty()),
            tag: self.tag.filter(|s| !s.is_empty()),
            author: self.author,
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
        }
    }
}

/// Body for submitting a comment. Fields stay optional at the wire level
/// so presence checks can answer with the standard error envelope
/// instead of a serde rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub post_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
}
