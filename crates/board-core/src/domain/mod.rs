//! Domain entities - the core business objects.

mod post;

pub use post::{NOT_DELETED, NewPost, Post, PostChanges, PostId, PostProjection};
