//! # Board Shared
//!
//! Request/response types exchanged with board clients.

pub mod dto;
pub mod error_code;
pub mod response;

pub use error_code::ErrorCode;
pub use response::{ApiResponse, ErrorResponse};
