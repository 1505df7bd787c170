use async_trait::async_trait;

use crate::stats::SiteStats;

/// Read-side port for site-wide summary counters.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Compute the current stats from a single consistent snapshot of
    /// the store. Never cached.
    async fn stats(&self) -> SiteStats;
}
