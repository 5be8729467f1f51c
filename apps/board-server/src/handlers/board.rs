//! Board API handlers.

use actix_web::{HttpResponse, web};

use board_core::domain::PostId;
use board_shared::ApiResponse;
use board_shared::dto::{BoardRequest, BoardResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/boards
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<BoardRequest>,
) -> AppResult<HttpResponse> {
    let id = state.board.create(body.into_inner().into_new_post()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(id)))
}

/// GET /api/boards
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<BoardResponse> = state.board.list_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/boards/{id}
pub async fn find(state: web::Data<AppState>, path: web::Path<PostId>) -> AppResult<HttpResponse> {
    let post = state.board.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(BoardResponse::from(post))))
}

/// PATCH /api/boards/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<BoardRequest>,
) -> AppResult<HttpResponse> {
    let id = state
        .board
        .update(path.into_inner(), body.into_inner().into_changes())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(id)))
}

/// DELETE /api/boards/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<PostId>) -> AppResult<HttpResponse> {
    let id = state.board.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(id, "Post deleted")))
}
