//! Board entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use board_core::domain::{NOT_DELETED, NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub writer: String,
    pub hits: i32,
    #[sea_orm(column_type = "Char(Some(1))")]
    pub delete_yn: String,
    pub created_date: DateTimeWithTimeZone,
    pub modified_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            writer: model.writer,
            hits: model.hits,
            delete_yn: model.delete_yn.chars().next().unwrap_or(NOT_DELETED),
            created_date: model.created_date.into(),
            modified_date: model.modified_date.map(Into::into),
        }
    }
}

/// Conversion from an unsaved post to an insertable ActiveModel.
/// The id is left to the database identity column.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            writer: Set(post.writer),
            hits: Set(post.hits),
            delete_yn: Set(post.delete_yn.to_string()),
            created_date: Set(post.created_date.into()),
            modified_date: Set(None),
        }
    }
}

/// ActiveModel that writes only the editable columns of an existing post.
impl From<&Post> for ActiveModel {
    fn from(post: &Post) -> Self {
        Self {
            id: Unchanged(post.id),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            writer: Set(post.writer.clone()),
            ..Default::default()
        }
    }
}
