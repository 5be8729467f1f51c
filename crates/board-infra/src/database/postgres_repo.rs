//! PostgreSQL board repository and store.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseTransaction, DbConn, EntityTrait, QueryOrder, TransactionTrait,
};

use board_core::domain::{NewPost, Post, PostId};
use board_core::error::RepoError;
use board_core::ports::{BoardStore, PostRepository, PostTransaction};

use super::entity::board::{self, Entity as BoardEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository<C = DbConn> = PostgresBaseRepository<BoardEntity, C>;

#[async_trait]
impl<C> PostRepository for PostgresPostRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn save(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = self.insert_model(board::ActiveModel::from(post)).await?;
        tracing::debug!(post_id = model.id, "Inserted board row");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.find_model(id).await?.map(Into::into))
    }

    async fn find_all_sorted(&self) -> Result<Vec<Post>, RepoError> {
        let result = BoardEntity::find()
            .order_by_desc(board::Column::Id)
            .order_by_desc(board::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, post: &Post) -> Result<Post, RepoError> {
        let model = self.update_model(board::ActiveModel::from(post)).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        self.delete_model(id).await
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.count_models().await
    }
}

#[async_trait]
impl PostTransaction for PostgresPostRepository<DatabaseTransaction> {
    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        let repo = *self;
        repo.db.commit().await.map_err(map_db_err)
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepoError> {
        let repo = *self;
        repo.db.rollback().await.map_err(map_db_err)
    }
}

/// Board store over a SeaORM connection pool.
pub struct SeaOrmBoardStore {
    db: DbConn,
}

impl SeaOrmBoardStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BoardStore for SeaOrmBoardStore {
    async fn begin(&self) -> Result<Box<dyn PostTransaction>, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        Ok(Box::new(PostgresPostRepository::<DatabaseTransaction>::new(txn)))
    }
}
