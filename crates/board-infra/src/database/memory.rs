//! In-memory board store - used as fallback when no database is configured.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use board_core::domain::{NewPost, Post, PostId};
use board_core::error::RepoError;
use board_core::ports::{BoardStore, PostRepository, PostTransaction};

#[derive(Debug, Clone)]
struct Table {
    rows: BTreeMap<PostId, Post>,
    next_id: PostId,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory board table.
///
/// Transactions are serialized: each one holds the table lock until it
/// commits or rolls back, and works on a staged copy that replaces the table
/// on commit.
/// Note: Data is lost on process restart.
#[derive(Clone, Default)]
pub struct InMemoryBoardStore {
    table: Arc<Mutex<Table>>,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for InMemoryBoardStore {
    async fn begin(&self) -> Result<Box<dyn PostTransaction>, RepoError> {
        let committed = self.table.clone().lock_owned().await;
        let staged = committed.clone();

        Ok(Box::new(InMemoryTransaction {
            committed,
            staged: Mutex::new(staged),
        }))
    }
}

struct InMemoryTransaction {
    committed: OwnedMutexGuard<Table>,
    staged: Mutex<Table>,
}

#[async_trait]
impl PostRepository for InMemoryTransaction {
    async fn save(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.staged.lock().await;
        let id = table.next_id;
        table.next_id += 1;

        let post = post.into_post(id);
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.staged.lock().await.rows.get(&id).cloned())
    }

    async fn find_all_sorted(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.staged.lock().await;
        let mut posts: Vec<Post> = table.rows.values().cloned().collect();
        posts.sort_by(|a, b| {
            b.id.cmp(&a.id)
                .then_with(|| b.created_date.cmp(&a.created_date))
        });
        Ok(posts)
    }

    async fn update(&self, post: &Post) -> Result<Post, RepoError> {
        let mut table = self.staged.lock().await;
        let row = table.rows.get_mut(&post.id).ok_or(RepoError::NotFound)?;

        row.title = post.title.clone();
        row.content = post.content.clone();
        row.writer = post.writer.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        self.staged
            .lock()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.staged.lock().await.rows.len() as u64)
    }
}

#[async_trait]
impl PostTransaction for InMemoryTransaction {
    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        let InMemoryTransaction {
            mut committed,
            staged,
        } = *self;
        *committed = staged.into_inner();
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepoError> {
        Ok(())
    }
}
