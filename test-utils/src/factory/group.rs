//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::group::GroupFactory;
///
/// let group = GroupFactory::new(&db)
///     .title("test-title")
///     .slug("test-slug")
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    description: String,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Group {id}"`
    /// - slug: `"group-{id}"`
    /// - description: `"Test group description"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Group {}", id),
            slug: format!("group-{}", id),
            description: "Test group description".to_string(),
        }
    }

    /// Sets the group title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the group slug used in `/group/{slug}/`.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the group description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate slug)
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
///
/// Shorthand for `GroupFactory::new(db).build().await`.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
