//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! blog entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod group;
pub mod page;
pub mod post;
pub mod user;

/// Date format used for every timestamp shown on a page.
pub(crate) const DISPLAY_DATE_FORMAT: &str = "%d %B %Y";
