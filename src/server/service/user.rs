//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by username.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound(_))` - No user with that username
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))
    }
}
