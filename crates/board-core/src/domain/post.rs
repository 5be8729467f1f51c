use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a post by the store.
pub type PostId = i64;

/// Soft-delete flag value for a live post.
pub const NOT_DELETED: char = 'N';

/// Post entity - one row of the `board` table.
///
/// Only `title`, `content` and `writer` change after creation, and only
/// through [`Post::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub hits: i32,
    pub delete_yn: char,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

impl Post {
    /// Overwrite the editable fields in place.
    pub fn apply(&mut self, changes: PostChanges) {
        self.title = changes.title;
        self.content = changes.content;
        self.writer = changes.writer;
    }
}

/// Outward view of a post, built by value from the entity.
///
/// [`Post`] itself does not implement this, so listing never hands out
/// stored entities.
pub trait PostProjection: From<Post> {}

/// A post that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub writer: String,
    pub hits: i32,
    pub delete_yn: char,
    pub created_date: DateTime<Utc>,
}

impl NewPost {
    /// Create a new, unsaved post with a zero view counter.
    pub fn new(title: String, content: String, writer: String, delete_yn: char) -> Self {
        Self {
            title,
            content,
            writer,
            hits: 0,
            delete_yn,
            created_date: Utc::now(),
        }
    }

    /// Attach the id assigned by the store.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            writer: self.writer,
            hits: self.hits,
            delete_yn: self.delete_yn,
            created_date: self.created_date,
            modified_date: None,
        }
    }
}

/// The editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub writer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_starts_with_zero_hits() {
        let post = NewPost::new("t".into(), "c".into(), "w".into(), NOT_DELETED);
        assert_eq!(post.hits, 0);
        assert_eq!(post.delete_yn, 'N');
    }

    #[test]
    fn apply_only_touches_editable_fields() {
        let mut post = NewPost::new("t".into(), "c".into(), "w".into(), 'N').into_post(7);
        let before = post.clone();

        post.apply(PostChanges {
            title: "t2".into(),
            content: "c2".into(),
            writer: "w2".into(),
        });

        assert_eq!(post.id, before.id);
        assert_eq!(post.created_date, before.created_date);
        assert_eq!(post.hits, before.hits);
        assert_eq!(post.delete_yn, before.delete_yn);
        assert_eq!(post.modified_date, None);
        assert_eq!(post.title, "t2");
        assert_eq!(post.content, "c2");
        assert_eq!(post.writer, "w2");
    }
}
