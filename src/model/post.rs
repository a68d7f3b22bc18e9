use serde::{Deserialize, Serialize};

use crate::model::{group::GroupDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PostDto {
    pub id: i32,
    pub text: String,
    /// Formatted as `"%d %B %Y"`.
    pub pub_date: String,
    pub author: UserDto,
    pub group: Option<GroupDto>,
}

/// Raw values submitted by the create/edit post form.
///
/// `group` is the selected group id as sent by the browser; an empty string
/// means no group.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PostFormDto {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub group: String,
}

/// Per-field validation messages for the post form.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PostFormErrorsDto {
    pub text: Option<String>,
    pub group: Option<String>,
}
