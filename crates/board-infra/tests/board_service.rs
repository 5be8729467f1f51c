use std::sync::Arc;

use board_core::domain::{NewPost, PostChanges};
use board_core::{BoardService, DomainError};
use board_infra::InMemoryBoardStore;
use board_shared::dto::BoardResponse;

fn service() -> BoardService {
    BoardService::new(Arc::new(InMemoryBoardStore::new()))
}

fn new_post(title: &str, content: &str, writer: &str) -> NewPost {
    NewPost::new(title.into(), content.into(), writer.into(), 'N')
}

fn changes(title: &str, content: &str, writer: &str) -> PostChanges {
    PostChanges {
        title: title.into(),
        content: content.into(),
        writer: writer.into(),
    }
}

#[tokio::test]
async fn create_then_fetch_returns_inputs_with_zero_hits() {
    let board = service();

    let id = board
        .create(new_post("1번 게시글 제목", "1번 게시글 내용", "다인"))
        .await
        .unwrap();
    let post = board.find_by_id(id).await.unwrap();

    assert_eq!(id, 1);
    assert_eq!(post.title, "1번 게시글 제목");
    assert_eq!(post.content, "1번 게시글 내용");
    assert_eq!(post.writer, "다인");
    assert_eq!(post.hits, 0);
}

#[tokio::test]
async fn list_returns_every_post_newest_first() {
    let board = service();
    for n in 1..=3 {
        board
            .create(new_post(&format!("title {n}"), "body", "writer"))
            .await
            .unwrap();
    }

    let listed: Vec<BoardResponse> = board.list_all().await.unwrap();

    let ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(listed[0].title, "title 3");
}

#[tokio::test]
async fn list_includes_soft_deleted_posts() {
    let board = service();
    board
        .create(NewPost::new("hidden".into(), "c".into(), "w".into(), 'Y'))
        .await
        .unwrap();

    let listed: Vec<BoardResponse> = board.list_all().await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].delete_yn, 'Y');
}

#[tokio::test]
async fn update_missing_post_fails_and_changes_nothing() {
    let board = service();
    let id = board.create(new_post("t", "c", "w")).await.unwrap();

    let err = board
        .update(id + 100, changes("수정", "c2", "다인"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::PostNotFound { id } if id == 101));
    let post = board.find_by_id(id).await.unwrap();
    assert_eq!(post.title, "t");
}

#[tokio::test]
async fn update_changes_only_editable_fields() {
    let board = service();
    let id = board
        .create(new_post("1번 게시글 제목", "1번 게시글 내용", "다인"))
        .await
        .unwrap();
    let before = board.find_by_id(id).await.unwrap();

    let updated_id = board
        .update(id, changes("수정", "c2", "다인"))
        .await
        .unwrap();
    let after = board.find_by_id(id).await.unwrap();

    assert_eq!(updated_id, id);
    assert_eq!(after.title, "수정");
    assert_eq!(after.content, "c2");
    assert_eq!(after.writer, "다인");
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_date, before.created_date);
    assert_eq!(after.hits, before.hits);
    assert_eq!(after.modified_date, before.modified_date);
}

#[tokio::test]
async fn delete_removes_post_and_decrements_count() {
    let board = service();
    let id = board
        .create(new_post("1번 게시글 제목", "1번 게시글 내용", "다인"))
        .await
        .unwrap();
    board.create(new_post("other", "c", "w")).await.unwrap();
    assert_eq!(board.count().await.unwrap(), 2);

    board.delete(id).await.unwrap();

    assert_eq!(board.count().await.unwrap(), 1);
    assert!(matches!(
        board.find_by_id(id).await,
        Err(DomainError::PostNotFound { .. })
    ));
}

#[tokio::test]
async fn delete_missing_post_is_not_found() {
    let board = service();
    assert!(matches!(
        board.delete(1).await,
        Err(DomainError::PostNotFound { id: 1 })
    ));
}

#[tokio::test]
async fn full_scenario() {
    let board = service();

    let id = board
        .create(new_post("1번 게시글 제목", "1번 게시글 내용", "다인"))
        .await
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(board.find_by_id(1).await.unwrap().title, "1번 게시글 제목");

    board.update(1, changes("수정", "c2", "다인")).await.unwrap();
    assert_eq!(board.find_by_id(1).await.unwrap().title, "수정");

    board.delete(1).await.unwrap();
    assert!(board.find_by_id(1).await.is_err());
}
