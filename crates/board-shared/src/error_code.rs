//! Error codes returned in error bodies.
//!
//! Each variant maps 1:1 to a SCREAMING_SNAKE_CASE string, an HTTP status and
//! a fixed message. Add new codes here; never pass ad-hoc strings as codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No post with the requested id
    PostsNotFound,
    /// Route exists but not for this HTTP method
    MethodNotAllowed,
    /// Anything else
    InternalServerError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PostsNotFound => "POSTS_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub const fn status(self) -> u16 {
        match self {
            Self::PostsNotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::InternalServerError => 500,
        }
    }

    /// HTTP reason phrase for [`ErrorCode::status`].
    pub const fn reason(self) -> &'static str {
        match self {
            Self::PostsNotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::PostsNotFound => "Post not found.",
            Self::MethodNotAllowed => "Request method is not supported for this resource.",
            Self::InternalServerError => "An internal server error occurred.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
