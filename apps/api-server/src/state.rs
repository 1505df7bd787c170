//! Application state - shared across all handlers.

use std::sync::Arc;

use gazette_core::ports::{CategoryStore, CommentStore, PostStore, StatsSource, UserStore};
use gazette_store::MemoryContentStore;

/// Shared application state. Each field is a port handle onto the same
/// store instance; handlers depend on the port they need, not on the
/// concrete store.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub users: Arc<dyn UserStore>,
    pub comments: Arc<dyn CommentStore>,
    pub stats: Arc<dyn StatsSource>,
}

impl AppState {
    /// Build the application state, optionally preloading demo content.
    pub fn new(seed_demo_content: bool) -> Self {
        let store = if seed_demo_content {
            Arc::new(MemoryContentStore::demo())
        } else {
            tracing::info!("Demo content disabled - starting with an empty store");
            Arc::new(MemoryContentStore::new())
        };

        tracing::info!("Application state initialized");

        Self {
            posts: store.clone(),
            categories: store.clone(),
            users: store.clone(),
            comments: store.clone(),
            stats: store,
        }
    }
}
