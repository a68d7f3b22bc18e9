//! Database repository layer for all blog entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity. Repositories use SeaORM entity models internally and return domain models
//! to keep the data layer separate from business logic.

pub mod group;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;
