//! Post data repository for database operations.
//!
//! Listings are ordered newest first (`pub_date` descending, then `id` descending)
//! and every returned `Post` has its author and group resolved.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::post::{CreatePostParam, Post, PostFilter, UpdatePostParam};

/// Repository providing database operations for posts.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post published now.
    ///
    /// # Arguments
    /// - `param` - Text, author, optional group and optional explicit id
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a duplicate explicit id
    pub async fn create(&self, param: CreatePostParam) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            id: param.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            text: ActiveValue::Set(param.text),
            pub_date: ActiveValue::Set(Utc::now()),
            author_id: ActiveValue::Set(param.author_id),
            group_id: ActiveValue::Set(param.group_id),
        }
        .insert(self.db)
        .await
    }

    /// Replaces the text and group of a post.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - The updated row
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        post_id: i32,
        param: UpdatePostParam,
    ) -> Result<Option<entity::post::Model>, DbErr> {
        let Some(existing) = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::post::ActiveModel = existing.into();
        active.text = ActiveValue::Set(param.text);
        active.group_id = ActiveValue::Set(param.group_id);

        Ok(Some(active.update(self.db).await?))
    }

    /// Finds a post by id with its author and group.
    pub async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![entity]).await?.pop())
    }

    /// Counts the posts matching `filter`.
    pub async fn count(&self, filter: PostFilter) -> Result<u64, DbErr> {
        Self::filtered(filter).count(self.db).await
    }

    /// Gets one page of the posts matching `filter`, newest first.
    ///
    /// # Arguments
    /// - `filter` - Which posts to list
    /// - `page_index` - Zero-indexed page number
    /// - `per_page` - Number of posts per page
    ///
    /// # Returns
    /// - `Ok(Vec<Post>)` - Posts of the page, empty past the last page
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_page(
        &self,
        filter: PostFilter,
        page_index: u64,
        per_page: u64,
    ) -> Result<Vec<Post>, DbErr> {
        let entities = Self::filtered(filter)
            .paginate(self.db, per_page)
            .fetch_page(page_index)
            .await?;

        self.with_relations(entities).await
    }

    fn filtered(filter: PostFilter) -> Select<entity::post::Entity> {
        let query = entity::prelude::Post::find();

        let query = match filter {
            PostFilter::All => query,
            PostFilter::Group(group_id) => {
                query.filter(entity::post::Column::GroupId.eq(group_id))
            }
            PostFilter::Author(author_id) => {
                query.filter(entity::post::Column::AuthorId.eq(author_id))
            }
        };

        query
            .order_by_desc(entity::post::Column::PubDate)
            .order_by_desc(entity::post::Column::Id)
    }

    /// Loads authors and groups of `posts` with one query each and attaches them.
    async fn with_relations(&self, posts: Vec<entity::post::Model>) -> Result<Vec<Post>, DbErr> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<i32> = posts.iter().map(|p| p.author_id).collect();
        let authors: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let group_ids: Vec<i32> = posts.iter().filter_map(|p| p.group_id).collect();
        let groups: HashMap<i32, entity::group::Model> = if group_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Group::find()
                .filter(entity::group::Column::Id.is_in(group_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| (g.id, g))
                .collect()
        };

        posts
            .into_iter()
            .map(|post| {
                let author = authors.get(&post.author_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Author {} of post {} not found",
                        post.author_id, post.id
                    ))
                })?;
                let group = post.group_id.and_then(|id| groups.get(&id).cloned());

                Ok(Post::from_entity(post, author, group))
            })
            .collect()
    }
}
