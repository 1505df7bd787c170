//! Site-wide summary counters.

use serde::{Deserialize, Serialize};

use crate::domain::PostView;

/// How many posts the popular and recent samples carry.
pub const STATS_SAMPLE: usize = 3;

/// Summary counters over the whole store, recomputed on every read.
///
/// `total_posts` counts published posts only; `total_views` sums view
/// counts across drafts as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total_posts: usize,
    pub total_users: usize,
    pub total_categories: usize,
    pub total_views: u64,
    pub popular_posts: Vec<PostView>,
    pub recent_posts: Vec<PostView>,
}
