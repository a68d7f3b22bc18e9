//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Authorship checks, page resolution and not-found handling
//! - **Orchestration**: Coordinating multiple repository calls per page
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod group;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;
