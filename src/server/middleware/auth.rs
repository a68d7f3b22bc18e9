use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the user behind a request's session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged in user, or `None` for anonymous requests.
    ///
    /// A session pointing at a user that no longer exists counts as anonymous.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        if user.is_none() {
            tracing::warn!("Session references user {} which no longer exists", user_id);
        }

        Ok(user)
    }

    /// Returns the logged in user or fails with `AuthError::LoginRequired`.
    ///
    /// # Arguments
    /// - `login_url` - Login page anonymous users are sent to
    /// - `next` - Path to return to after logging in
    pub async fn require(&self, login_url: &str, next: &str) -> Result<User, AppError> {
        match self.current_user().await? {
            Some(user) => Ok(user),
            None => Err(AuthError::LoginRequired {
                login_url: login_url.to_string(),
                next: next.to_string(),
            }
            .into()),
        }
    }
}
