use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity - a content section posts are filed under. Categories
/// are fixed once the store is loaded, so there is no update input type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display color as a hex string, e.g. `#61DAFB`.
    pub color: String,
}

impl Category {
    /// Create a new category with a generated ID.
    pub fn new(name: &str, slug: &str, description: Option<&str>, color: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: description.map(str::to_string),
            color: color.to_string(),
        }
    }
}
