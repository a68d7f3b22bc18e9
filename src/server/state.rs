//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::template::TemplateEngine;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and
/// `TemplateEngine` shares its registry through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Registry of all page templates.
    pub templates: TemplateEngine,

    /// Where anonymous users are sent when a page requires login.
    pub login_url: String,

    /// Number of posts on each page of a listing.
    pub posts_per_page: u64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `templates` - Registered page templates
    /// - `login_url` - Login page URL used for redirects
    /// - `posts_per_page` - Page size of post listings
    pub fn new(
        db: DatabaseConnection,
        templates: TemplateEngine,
        login_url: String,
        posts_per_page: u64,
    ) -> Self {
        Self {
            db,
            templates,
            login_url,
            posts_per_page,
        }
    }
}
