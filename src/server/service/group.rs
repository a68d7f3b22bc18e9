use sea_orm::DatabaseConnection;

use crate::server::{data::group::GroupRepository, error::AppError, model::group::Group};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every group, ordered by title, for the post form's group choices.
    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a group by slug.
    ///
    /// # Returns
    /// - `Ok(Group)` - Group found
    /// - `Err(AppError::NotFound(_))` - No group with that slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", slug)))
    }
}
