//! Board workflow - create, list and update posts.
//!
//! Every operation runs in its own transaction: begun on entry, committed when
//! the operation succeeds and rolled back on any error.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges, PostId, PostProjection};
use crate::error::{DomainError, RepoError};
use crate::ports::{BoardStore, PostTransaction};

/// Orchestrates board operations over a [`BoardStore`].
#[derive(Clone)]
pub struct BoardService {
    store: Arc<dyn BoardStore>,
}

impl BoardService {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Store a new post and return its id.
    pub async fn create(&self, post: NewPost) -> Result<PostId, DomainError> {
        let tx = self.store.begin().await?;
        let result = tx.save(post).await.map(|p| p.id).map_err(Into::into);
        let id = finish(tx, result).await?;

        tracing::info!(post_id = id, "Post created");
        Ok(id)
    }

    /// All posts projected into `R`, newest first.
    pub async fn list_all<R>(&self) -> Result<Vec<R>, DomainError>
    where
        R: PostProjection,
    {
        let tx = self.store.begin().await?;
        let result = tx.find_all_sorted().await.map_err(Into::into);
        let posts = finish(tx, result).await?;

        Ok(posts.into_iter().map(R::from).collect())
    }

    /// Fetch one post.
    pub async fn find_by_id(&self, id: PostId) -> Result<Post, DomainError> {
        let tx = self.store.begin().await?;
        let result = find_existing(tx.as_ref(), id).await;
        finish(tx, result).await
    }

    /// Replace title, content and writer of an existing post.
    ///
    /// Fails with [`DomainError::PostNotFound`] when no post has this id;
    /// nothing is written in that case.
    pub async fn update(&self, id: PostId, changes: PostChanges) -> Result<PostId, DomainError> {
        let tx = self.store.begin().await?;
        let result = apply_update(tx.as_ref(), id, changes).await;
        let id = finish(tx, result).await?;

        tracing::info!(post_id = id, "Post updated");
        Ok(id)
    }

    /// Remove a post physically.
    pub async fn delete(&self, id: PostId) -> Result<PostId, DomainError> {
        let tx = self.store.begin().await?;
        let result = match tx.delete(id).await {
            Ok(()) => Ok(id),
            Err(RepoError::NotFound) => Err(DomainError::PostNotFound { id }),
            Err(e) => Err(e.into()),
        };
        let id = finish(tx, result).await?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(id)
    }

    /// Number of stored posts.
    pub async fn count(&self) -> Result<u64, DomainError> {
        let tx = self.store.begin().await?;
        let result = tx.count().await.map_err(Into::into);
        finish(tx, result).await
    }
}

async fn find_existing(tx: &dyn PostTransaction, id: PostId) -> Result<Post, DomainError> {
    tx.find_by_id(id)
        .await?
        .ok_or(DomainError::PostNotFound { id })
}

async fn apply_update(
    tx: &dyn PostTransaction,
    id: PostId,
    changes: PostChanges,
) -> Result<PostId, DomainError> {
    let mut post = find_existing(tx, id).await?;
    post.apply(changes);
    tx.update(&post).await?;
    Ok(id)
}

/// Commit on success, roll back on failure. The operation's error wins over a
/// rollback failure.
async fn finish<T>(
    tx: Box<dyn PostTransaction>,
    result: Result<T, DomainError>,
) -> Result<T, DomainError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
