use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbConn, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait,
};

use board_core::error::RepoError;

/// Generic PostgreSQL repository over any SeaORM connection.
///
/// `C` is a pooled [`DbConn`] or a `DatabaseTransaction`, so the same
/// repository code runs inside or outside a transaction.
pub struct PostgresBaseRepository<E, C = DbConn>
where
    E: EntityTrait,
{
    pub(crate) db: C,
    _entity: PhantomData<E>,
}

impl<E, C> PostgresBaseRepository<E, C>
where
    E: EntityTrait,
{
    pub fn new(db: C) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E, C> PostgresBaseRepository<E, C>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    pub(crate) async fn find_model<ID>(&self, id: ID) -> Result<Option<E::Model>, RepoError>
    where
        ID: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.db).await.map_err(map_db_err)
    }

    pub(crate) async fn insert_model(&self, model: E::ActiveModel) -> Result<E::Model, RepoError> {
        model.insert(&self.db).await.map_err(map_db_err)
    }

    pub(crate) async fn update_model(&self, model: E::ActiveModel) -> Result<E::Model, RepoError> {
        model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => map_db_err(other),
        })
    }

    pub(crate) async fn delete_model<ID>(&self, id: ID) -> Result<(), RepoError>
    where
        ID: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    pub(crate) async fn count_models(&self) -> Result<u64, RepoError> {
        E::find().count(&self.db).await.map_err(map_db_err)
    }
}

/// Translate SeaORM errors into repository errors.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_maps_to_constraint() {
        let err = DbErr::Custom("duplicate key value violates unique constraint".into());
        assert!(matches!(map_db_err(err), RepoError::Constraint(_)));
    }

    #[test]
    fn other_errors_map_to_query() {
        let err = DbErr::Custom("syntax error".into());
        assert!(matches!(map_db_err(err), RepoError::Query(_)));
    }
}
