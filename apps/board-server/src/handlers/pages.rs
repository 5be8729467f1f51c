//! Page routes. Each resolves to a view template name and nothing else.

use actix_web::HttpResponse;

use board_shared::dto::PageView;

pub const LIST_VIEW: &str = "board/list";
pub const WRITE_VIEW: &str = "board/write";

/// GET /board/list
pub async fn open_board_list() -> HttpResponse {
    HttpResponse::Ok().json(PageView::new(LIST_VIEW))
}

/// GET /board/write
pub async fn open_board_write() -> HttpResponse {
    HttpResponse::Ok().json(PageView::new(WRITE_VIEW))
}
