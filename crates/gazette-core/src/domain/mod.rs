//! Domain entities - the core content objects.

mod category;

mod comment;

mod post;

mod user;

pub use category::Category;
pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post, PostPatch, PostView};
pub use user::{NewUser, User, UserPatch};
