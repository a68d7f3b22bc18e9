//! Template contexts, one per rendered page.

use serde::Serialize;

use crate::model::{
    group::{GroupDto, GroupOptionDto},
    page::PageDto,
    post::{PostDto, PostFormDto, PostFormErrorsDto},
    user::UserDto,
};

/// Values every page's header needs.
#[derive(Serialize, Clone, Debug)]
pub struct LayoutDto {
    /// The logged in user, if any.
    pub viewer: Option<UserDto>,
    pub login_url: String,
}

/// Context for `posts/index.html`.
#[derive(Serialize, Debug)]
pub struct IndexPage {
    pub layout: LayoutDto,
    pub page_obj: PageDto<PostDto>,
}

/// Context for `posts/group_list.html`.
#[derive(Serialize, Debug)]
pub struct GroupListPage {
    pub layout: LayoutDto,
    pub group: GroupDto,
    pub page_obj: PageDto<PostDto>,
}

/// Context for `posts/profile.html`.
#[derive(Serialize, Debug)]
pub struct ProfilePage {
    pub layout: LayoutDto,
    pub author: UserDto,
    pub post_count: u64,
    pub page_obj: PageDto<PostDto>,
}

/// Context for `posts/post_detail.html`.
#[derive(Serialize, Debug)]
pub struct PostDetailPage {
    pub layout: LayoutDto,
    pub post: PostDto,
    pub author_post_count: u64,
    pub is_author: bool,
}

/// Context for `posts/create.html`, shared by the create and edit pages.
#[derive(Serialize, Debug)]
pub struct PostFormPage {
    pub layout: LayoutDto,
    pub is_edit: bool,
    pub post_id: Option<i32>,
    pub form: PostFormDto,
    pub groups: Vec<GroupOptionDto>,
    pub errors: PostFormErrorsDto,
}

/// Context for `core/404.html` and `core/500.html`.
#[derive(Serialize, Debug)]
pub struct ErrorPage {
    pub layout: LayoutDto,
    pub path: String,
}

/// Context for `users/logged_out.html`.
#[derive(Serialize, Debug)]
pub struct LoggedOutPage {
    pub layout: LayoutDto,
}
