//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use board_core::domain::{NOT_DELETED, NewPost, Post, PostChanges, PostId, PostProjection};

fn default_delete_yn() -> char {
    NOT_DELETED
}

/// Request to create or update a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequest {
    pub title: String,
    pub content: String,
    pub writer: String,
    #[serde(default = "default_delete_yn")]
    pub delete_yn: char,
}

impl BoardRequest {
    /// Build the unsaved post this request describes.
    pub fn into_new_post(self) -> NewPost {
        NewPost::new(self.title, self.content, self.writer, self.delete_yn)
    }

    /// The editable fields carried by this request. `delete_yn` is ignored.
    pub fn into_changes(self) -> PostChanges {
        PostChanges {
            title: self.title,
            content: self.content,
            writer: self.writer,
        }
    }
}

/// Public projection of a stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub hits: i32,
    pub delete_yn: char,
    pub created_date: DateTime<Utc>,
    pub modified_date: Option<DateTime<Utc>>,
}

impl From<Post> for BoardResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            writer: post.writer,
            hits: post.hits,
            delete_yn: post.delete_yn,
            created_date: post.created_date,
            modified_date: post.modified_date,
        }
    }
}

impl PostProjection for BoardResponse {}

/// Name of the view template a page route resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub view: String,
}

impl PageView {
    pub fn new(view: impl Into<String>) -> Self {
        Self { view: view.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_flag_defaults_to_not_deleted() {
        let req: BoardRequest = serde_json::from_str(
            r#"{"title":"1번 게시글 제목","content":"1번 게시글 내용","writer":"다인"}"#,
        )
        .unwrap();
        assert_eq!(req.delete_yn, 'N');

        let post = req.into_new_post();
        assert_eq!(post.hits, 0);
        assert_eq!(post.writer, "다인");
    }

    #[test]
    fn response_uses_camel_case_fields() {
        let post = NewPost::new("t".into(), "c".into(), "w".into(), 'Y').into_post(3);
        let json = serde_json::to_value(BoardResponse::from(post)).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["deleteYn"], "Y");
        assert!(json.get("createdDate").is_some());
        assert!(json["modifiedDate"].is_null());
    }
}
