//! SeaORM entities for the blog schema.

pub mod prelude;

pub mod group;
pub mod post;
pub mod user;
