//! # Board Core
//!
//! The domain layer of the board backend.
//! Posts, the persistence ports they are stored through, and the board workflow.
//! This crate has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::BoardService;
