//! Post service for business logic.
//!
//! Provides the listings behind the index, group and profile pages, the detail page
//! and creation and editing of posts. Editing is restricted to the post's author.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::post::PostRepository,
    error::{auth::AuthError, AppError},
    model::{
        group::Group,
        page::{self, Paginated},
        post::{CreatePostParam, Post, PostFilter, PostForm, UpdatePostParam},
        user::User,
    },
    service::{group::GroupService, user::UserService},
};

/// Service providing business logic for posts.
pub struct PostService<'a> {
    db: &'a DatabaseConnection,
    per_page: u64,
}

impl<'a> PostService<'a> {
    /// Creates a new PostService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `per_page` - Number of posts on each page of a listing
    pub fn new(db: &'a DatabaseConnection, per_page: u64) -> Self {
        Self { db, per_page }
    }

    /// Gets a page of all posts, newest first.
    ///
    /// # Arguments
    /// - `page` - Raw `?page=` value, resolved as described in `model::page`
    pub async fn get_index(&self, page: Option<&str>) -> Result<Paginated<Post>, AppError> {
        self.paginate(PostFilter::All, page).await
    }

    /// Gets a group and a page of the posts published into it.
    ///
    /// # Returns
    /// - `Ok((Group, Paginated<Post>))` - The group and the requested page
    /// - `Err(AppError::NotFound(_))` - No group with that slug
    pub async fn get_group_posts(
        &self,
        slug: &str,
        page: Option<&str>,
    ) -> Result<(Group, Paginated<Post>), AppError> {
        let group = GroupService::new(self.db).get_by_slug(slug).await?;
        let posts = self.paginate(PostFilter::Group(group.id), page).await?;

        Ok((group, posts))
    }

    /// Gets a user and a page of the posts they wrote.
    ///
    /// The page's `total` is the user's post count.
    ///
    /// # Returns
    /// - `Ok((User, Paginated<Post>))` - The author and the requested page
    /// - `Err(AppError::NotFound(_))` - No user with that username
    pub async fn get_profile(
        &self,
        username: &str,
        page: Option<&str>,
    ) -> Result<(User, Paginated<Post>), AppError> {
        let author = UserService::new(self.db).get_by_username(username).await?;
        let posts = self.paginate(PostFilter::Author(author.id), page).await?;

        Ok((author, posts))
    }

    /// Gets a post together with the number of posts its author has written.
    ///
    /// # Returns
    /// - `Ok((Post, u64))` - The post and its author's post count
    /// - `Err(AppError::NotFound(_))` - No post with that id
    pub async fn get_detail(&self, post_id: i32) -> Result<(Post, u64), AppError> {
        let repo = PostRepository::new(self.db);

        let post = repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;
        let author_post_count = repo.count(PostFilter::Author(post.author.id)).await?;

        Ok((post, author_post_count))
    }

    /// Gets a post that `user` is about to edit.
    ///
    /// # Returns
    /// - `Ok(Post)` - The post, written by `user`
    /// - `Err(AppError::NotFound(_))` - No post with that id
    /// - `Err(AppError::AuthErr(AuthError::NotAuthor))` - Someone else wrote the post
    pub async fn get_for_edit(&self, post_id: i32, user: &User) -> Result<Post, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        if !post.is_authored_by(user) {
            return Err(AuthError::NotAuthor {
                user_id: user.id,
                post_id,
            }
            .into());
        }

        Ok(post)
    }

    /// Publishes a validated post written by `author`.
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post with author and group resolved
    /// - `Err(AppError::DbErr(_))` - Database error during insert
    pub async fn create(&self, form: PostForm, author: &User) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        let created = repo
            .create(CreatePostParam {
                id: None,
                text: form.text,
                author_id: author.id,
                group_id: form.group_id,
            })
            .await?;

        repo.find_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Post {} missing after creation", created.id)))
    }

    /// Replaces the text and group of a post written by `user`.
    ///
    /// # Returns
    /// - `Ok(Post)` - The updated post
    /// - `Err(AppError::NotFound(_))` - No post with that id
    /// - `Err(AppError::AuthErr(AuthError::NotAuthor))` - Someone else wrote the post
    pub async fn update(&self, post_id: i32, form: PostForm, user: &User) -> Result<Post, AppError> {
        self.get_for_edit(post_id, user).await?;

        let repo = PostRepository::new(self.db);
        repo.update(
            post_id,
            UpdatePostParam {
                text: form.text,
                group_id: form.group_id,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        repo.find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))
    }

    async fn paginate(
        &self,
        filter: PostFilter,
        page: Option<&str>,
    ) -> Result<Paginated<Post>, AppError> {
        let repo = PostRepository::new(self.db);

        let total = repo.count(filter).await?;
        let num_pages = page::num_pages(total, self.per_page);
        let number = page::resolve_page_number(page, num_pages);
        let items = repo.get_page(filter, number - 1, self.per_page).await?;

        Ok(Paginated {
            items,
            number,
            num_pages,
            total,
        })
    }
}
