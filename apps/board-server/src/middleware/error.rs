//! Global error translator.
//!
//! Every failure a handler can produce ends up as an [`AppError`], and every
//! `AppError` renders as an [`ErrorResponse`] built from its [`ErrorCode`].

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use board_core::domain::PostId;
use board_core::error::{DomainError, RepoError};
use board_shared::{ErrorCode, ErrorResponse};
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    PostNotFound(PostId),
    MethodNotAllowed(String),
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::PostNotFound(_) => ErrorCode::PostsNotFound,
            AppError::MethodNotAllowed(_) => ErrorCode::MethodNotAllowed,
            AppError::Internal(_) => ErrorCode::InternalServerError,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::PostNotFound(id) => write!(f, "Post not found: {}", id),
            AppError::MethodNotAllowed(method) => write!(f, "Method not allowed: {}", method),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code().status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::PostNotFound(id) => {
                tracing::error!(post_id = id, code = %self.code(), "Post lookup failed");
            }
            AppError::MethodNotAllowed(method) => {
                tracing::error!(method = %method, "Method not supported");
            }
            // Logged here only; the client gets the fixed body.
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
            }
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.code()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PostNotFound { id } => AppError::PostNotFound(id),
            DomainError::Repository(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
