use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test context containing database connection, session, and test environment setup.
///
/// Provides an in-memory SQLite database connection and sessions for isolated
/// unit and integration testing. The database and the default session are created
/// lazily on first access and persist for the lifetime of the test context.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Optional default session instance.
    ///
    /// Initialized lazily when `session()` is first called. Uses the same
    /// in-memory SQLite database as `db` for session storage.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates a new session backed by the in-memory database.
    ///
    /// Every call returns a distinct session that has not been persisted yet. The
    /// session table is created on first use. Use this when a test needs more than
    /// one independent session, e.g. one per simulated client.
    ///
    /// # Returns
    /// - `Ok(Session)` - A new, unsaved session
    /// - `Err(TestError::Database)` - Failed to initialize database connection or session table
    pub async fn new_session(&mut self) -> Result<Session, TestError> {
        let db = self.database().await?;

        let pool = db.get_sqlite_connection_pool();
        let session_store = SqliteStore::new(pool.clone());

        session_store
            .migrate()
            .await
            .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

        Ok(Session::new(
            None,
            Arc::new(session_store),
            Some(Expiry::OnInactivity(Duration::days(7))),
        ))
    }

    /// Gets or creates the default test session instance.
    ///
    /// Subsequent calls return the same session instance.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::Database)` - Failed to initialize database connection or session table
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    ///
    /// session.insert("auth:user", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let session = self.new_session().await?;
            self.session = Some(session);
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => unreachable!("session initialized above"),
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids borrow checker issues when calling `database()` and `session()` separately.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both database and session
    /// - `Err(TestError::Database)` - Failed to initialize database or session
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => unreachable!("database and session initialized above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn new_sessions_are_independent() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_blog_tables().build().await?;

        let first = test.new_session().await?;
        let second = test.new_session().await?;

        first.insert("key", 1).await?;

        assert_eq!(first.get::<i32>("key").await?, Some(1));
        assert_eq!(second.get::<i32>("key").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn default_session_is_reused() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        test.session().await?.insert("key", "value").await?;
        let value: Option<String> = test.session().await?.get("key").await?;

        assert_eq!(value.as_deref(), Some("value"));

        Ok(())
    }
}
