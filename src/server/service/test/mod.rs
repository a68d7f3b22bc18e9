use crate::server::{
    error::{auth::AuthError, AppError},
    model::{post::PostForm, user::User},
    service::{group::GroupService, post::PostService, user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

mod group;
