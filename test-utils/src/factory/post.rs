//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// The id is assigned by the database unless set explicitly with `id()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::post::PostFactory;
///
/// let post = PostFactory::new(&db, user.id)
///     .id(1234)
///     .text("Тестовый текст")
///     .group_id(Some(group.id))
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    text: String,
    pub_date: DateTime<Utc>,
    author_id: i32,
    group_id: Option<i32>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - id: assigned by the database
    /// - text: `"Post {id}"`
    /// - pub_date: now
    /// - group_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - Id of the user authoring the post
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        Self {
            db,
            id: None,
            text: format!("Post {}", next_id()),
            pub_date: Utc::now(),
            author_id,
            group_id: None,
        }
    }

    /// Sets an explicit primary key for the post.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the post text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the publication date.
    pub fn pub_date(mut self, pub_date: DateTime<Utc>) -> Self {
        self.pub_date = pub_date;
        self
    }

    /// Sets the group the post belongs to.
    pub fn group_id(mut self, group_id: Option<i32>) -> Self {
        self.group_id = group_id;
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate id)
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            text: ActiveValue::Set(self.text),
            pub_date: ActiveValue::Set(self.pub_date),
            author_id: ActiveValue::Set(self.author_id),
            group_id: ActiveValue::Set(self.group_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
///
/// Shorthand for `PostFactory::new(db, author_id).build().await`.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
