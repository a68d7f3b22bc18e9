//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let group = factory::group::create_group(&db).await?;
//! let post = factory::post::PostFactory::new(&db, user.id)
//!     .id(1234)
//!     .group_id(Some(group.id))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `group` - Create group entities
//! - `post` - Create post entities
//! - `helpers` - Unique ids and creating posts together with their dependencies

pub mod group;
pub mod helpers;
pub mod post;
pub mod user;

pub use group::create_group;
pub use post::create_post;
pub use user::create_user;
