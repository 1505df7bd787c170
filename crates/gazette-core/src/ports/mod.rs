//! Ports - trait definitions for the content store.
//! These are the "interfaces" that storage adapters must implement.

mod categories;
mod comments;
mod posts;
mod stats;
mod users;

pub use categories::CategoryStore;
pub use comments::CommentStore;
pub use posts::PostStore;
pub use stats::StatsSource;
pub use users::UserStore;
