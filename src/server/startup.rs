use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError, template::TemplateEngine};

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr(_))` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite database.
///
/// Sessions live in the `tower_sessions` table of the same database, which is created
/// if missing. Sessions expire after seven days of inactivity.
///
/// # Arguments
/// - `db` - Connected Sqlite database
/// - `secure` - Whether the session cookie is restricted to HTTPS
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the router with
/// - `Err(AppError::SqlxErr(_))` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    secure: bool,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Parses and registers every embedded template.
pub fn setup_templates() -> Result<TemplateEngine, AppError> {
    TemplateEngine::new()
}
