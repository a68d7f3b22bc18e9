use crate::server::{
    data::{group::GroupRepository, post::PostRepository, user::UserRepository},
    model::{
        group::Group,
        post::{CreatePostParam, PostFilter, UpdatePostParam},
        user::User,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod group;
mod post;
