use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post repository - the persistence gateway for the `board` table.
///
/// Absence is reported as `Ok(None)`, never as an error.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post and return it with its assigned id.
    async fn save(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// All posts, newest id first, then newest creation date.
    async fn find_all_sorted(&self) -> Result<Vec<Post>, RepoError>;

    /// Write the current field values of an existing post back to the store.
    async fn update(&self, post: &Post) -> Result<Post, RepoError>;

    /// Delete a post by its id. Returns `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// A repository bound to one open transaction.
#[async_trait]
pub trait PostTransaction: PostRepository {
    async fn commit(self: Box<Self>) -> Result<(), RepoError>;

    async fn rollback(self: Box<Self>) -> Result<(), RepoError>;
}

/// Entry point to the store: hands out transactions.
#[async_trait]
pub trait BoardStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn PostTransaction>, RepoError>;
}
