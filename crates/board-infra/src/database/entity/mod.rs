//! SeaORM entities.

pub mod board;
