//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// Number of stored posts, absent when the store could not be reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<u64>,
}

/// Health check endpoint - returns server status and store reachability.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let posts = match state.board.count().await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the store");
            None
        }
    };

    let response = HealthResponse {
        status: if posts.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        posts,
    };

    HttpResponse::Ok().json(response)
}
