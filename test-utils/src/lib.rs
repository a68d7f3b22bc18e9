//! Yatube Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the yatube
//! blog. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, session storage and factories for blog entities.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and sessions
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, groups and posts with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_post_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_blog_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let (user, group, post) = factory::helpers::create_post_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
