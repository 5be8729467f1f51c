//! HTTP handlers and route configuration.

mod board;
mod health;
mod pages;

use actix_web::{HttpRequest, HttpResponse, Route, guard, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// Every resource falls back to [`method_not_allowed`] for verbs it does not
/// route, so unsupported methods get the standard error body.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::scope("/api")
                // Public routes
                .service(
                    web::resource("/health")
                        .route(get_or_head().to(health::health_check))
                        .default_service(web::to(method_not_allowed)),
                )
                // Board routes
                .service(
                    web::resource("/boards")
                        .route(get_or_head().to(board::list))
                        .route(web::post().to(board::create))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/boards/{id}")
                        .route(get_or_head().to(board::find))
                        .route(web::patch().to(board::update))
                        .route(web::delete().to(board::delete))
                        .default_service(web::to(method_not_allowed)),
                ),
        )
        // Page routes
        .service(
            web::scope("/board")
                .service(
                    web::resource("/list")
                        .route(get_or_head().to(pages::open_board_list))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/write")
                        .route(get_or_head().to(pages::open_board_write))
                        .default_service(web::to(method_not_allowed)),
                ),
        );
}

/// GET route that answers HEAD as well.
fn get_or_head() -> Route {
    web::route().guard(guard::Any(guard::Get()).or(guard::Head()))
}

async fn method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed(req.method().to_string()))
}

/// Unreadable JSON bodies fall through to the generic internal error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Internal(format!("Invalid JSON body: {}", err)).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::Internal(format!("Invalid path: {}", err)).into())
}

#[cfg(test)]
mod tests {
    use actix_web::{
        App,
        http::{Method, StatusCode},
        test, web,
    };
    use serde_json::{Value, json};

    use super::configure_routes;
    use crate::state::AppState;

    macro_rules! board_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::in_memory()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn first_post() -> Value {
        json!({
            "title": "1번 게시글 제목",
            "content": "1번 게시글 내용",
            "writer": "다인"
        })
    }

    #[actix_web::test]
    async fn page_routes_return_view_names() {
        let app = board_app!();

        for (uri, view) in [("/board/list", "board/list"), ("/board/write", "board/write")] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["view"], view);
        }
    }

    #[actix_web::test]
    async fn create_update_delete_scenario() {
        let app = board_app!();

        let req = test::TestRequest::post()
            .uri("/api/boards")
            .set_json(first_post())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"], 1);

        let req = test::TestRequest::get().uri("/api/boards/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "1번 게시글 제목");
        assert_eq!(body["data"]["hits"], 0);
        assert_eq!(body["data"]["deleteYn"], "N");

        let req = test::TestRequest::patch()
            .uri("/api/boards/1")
            .set_json(json!({"title": "수정", "content": "c2", "writer": "다인"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], 1);

        let req = test::TestRequest::get().uri("/api/boards/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "수정");
        assert_eq!(body["data"]["content"], "c2");

        let req = test::TestRequest::delete().uri("/api/boards/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/boards/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn list_is_newest_first() {
        let app = board_app!();
        for title in ["a", "b"] {
            let req = test::TestRequest::post()
                .uri("/api/boards")
                .set_json(json!({"title": title, "content": "", "writer": ""}))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/api/boards").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["id"], 2);
        assert_eq!(data[1]["id"], 1);
    }

    #[actix_web::test]
    async fn update_missing_post_is_404_with_error_body() {
        let app = board_app!();

        let req = test::TestRequest::patch()
            .uri("/api/boards/99")
            .set_json(first_post())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["code"], "POSTS_NOT_FOUND");
        assert_eq!(body["error"], "Not Found");
    }

    #[actix_web::test]
    async fn unsupported_method_is_405() {
        let app = board_app!();

        let req = test::TestRequest::post().uri("/board/list").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");

        let req = test::TestRequest::put().uri("/api/boards/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn head_is_served_on_read_routes() {
        let app = board_app!();

        for uri in ["/board/list", "/board/write", "/api/boards", "/api/health"] {
            let req = test::TestRequest::default()
                .method(Method::HEAD)
                .uri(uri)
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK, "HEAD {uri}");
        }
    }

    #[actix_web::test]
    async fn malformed_body_is_internal_error() {
        let app = board_app!();

        let req = test::TestRequest::post()
            .uri("/api/boards")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    }

    #[actix_web::test]
    async fn health_reports_post_count() {
        let app = board_app!();

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 0);
    }
}
