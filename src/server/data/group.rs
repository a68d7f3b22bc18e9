//! Group data repository for database operations.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::group::Group;

/// Repository providing database operations for groups.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a group by its URL slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find()
            .filter(entity::group::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Gets all groups ordered alphabetically by title.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Title)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }
}
