//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//!
//! Without `postgres` only the in-memory store is built.

pub mod database;

pub use database::InMemoryBoardStore;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresPostRepository, SeaOrmBoardStore};
