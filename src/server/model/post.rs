//! Post domain models, parameters and form validation.

use chrono::{DateTime, Utc};

use crate::{
    model::post::{PostDto, PostFormDto, PostFormErrorsDto},
    server::model::{group::Group, user::User, DISPLAY_DATE_FORMAT},
};

const REQUIRED_FIELD: &str = "This field is required.";
const INVALID_CHOICE: &str = "Select a valid choice. That choice is not one of the available choices.";

/// A published post with its author and group resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author: User,
    pub group: Option<Group>,
}

impl Post {
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            text: self.text,
            pub_date: self.pub_date.format(DISPLAY_DATE_FORMAT).to_string(),
            author: self.author.into_dto(),
            group: self.group.map(Group::into_dto),
        }
    }

    /// Builds a post from its entity and the already loaded author and group.
    pub fn from_entity(
        entity: entity::post::Model,
        author: entity::user::Model,
        group: Option<entity::group::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            pub_date: entity.pub_date,
            author: User::from_entity(author),
            group: group.map(Group::from_entity),
        }
    }

    pub fn is_authored_by(&self, user: &User) -> bool {
        self.author.id == user.id
    }
}

/// Which posts a listing contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    All,
    /// Posts published into the group with this id.
    Group(i32),
    /// Posts written by the user with this id.
    Author(i32),
}

/// Parameters for creating a post.
#[derive(Debug, Clone)]
pub struct CreatePostParam {
    /// Explicit primary key; assigned by the database when `None`.
    pub id: Option<i32>,
    pub text: String,
    pub author_id: i32,
    pub group_id: Option<i32>,
}

/// Parameters for editing a post. The author never changes.
#[derive(Debug, Clone)]
pub struct UpdatePostParam {
    pub text: String,
    pub group_id: Option<i32>,
}

/// A validated create/edit post form.
#[derive(Debug, Clone, PartialEq)]
pub struct PostForm {
    /// Post text with surrounding whitespace removed, never empty.
    pub text: String,
    pub group_id: Option<i32>,
}

impl PostForm {
    /// Validates submitted form values.
    ///
    /// # Arguments
    /// - `input` - Raw submitted values
    /// - `groups` - Groups the post may be published into
    ///
    /// # Returns
    /// - `Ok(PostForm)` - Text is not blank and the group is empty or one of `groups`
    /// - `Err(PostFormErrorsDto)` - Message for every invalid field
    pub fn validate(input: &PostFormDto, groups: &[Group]) -> Result<Self, PostFormErrorsDto> {
        let mut errors = PostFormErrorsDto::default();

        let text = input.text.trim();
        if text.is_empty() {
            errors.text = Some(REQUIRED_FIELD.to_string());
        }

        let group = input.group.trim();
        let group_id = if group.is_empty() {
            None
        } else {
            match group.parse::<i32>() {
                Ok(id) if groups.iter().any(|g| g.id == id) => Some(id),
                _ => {
                    errors.group = Some(INVALID_CHOICE.to_string());
                    None
                }
            }
        };

        if errors.text.is_some() || errors.group.is_some() {
            return Err(errors);
        }

        Ok(Self {
            text: text.to_string(),
            group_id,
        })
    }

    /// Pre-fills form values from an existing post for the edit page.
    pub fn initial(post: &Post) -> PostFormDto {
        PostFormDto {
            text: post.text.clone(),
            group: post
                .group
                .as_ref()
                .map(|g| g.id.to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<Group> {
        vec![Group {
            id: 7,
            title: "test-title".to_string(),
            slug: "test-slug".to_string(),
            description: "test-decsr".to_string(),
        }]
    }

    fn input(text: &str, group: &str) -> PostFormDto {
        PostFormDto {
            text: text.to_string(),
            group: group.to_string(),
        }
    }

    #[test]
    fn accepts_text_without_group() {
        let form = PostForm::validate(&input("Тестовый текст", ""), &groups()).unwrap();

        assert_eq!(form.text, "Тестовый текст");
        assert_eq!(form.group_id, None);
    }

    #[test]
    fn trims_text_and_accepts_known_group() {
        let form = PostForm::validate(&input("  hello \n", "7"), &groups()).unwrap();

        assert_eq!(form.text, "hello");
        assert_eq!(form.group_id, Some(7));
    }

    #[test]
    fn rejects_blank_text() {
        let errors = PostForm::validate(&input("   ", ""), &groups()).unwrap_err();

        assert_eq!(errors.text.as_deref(), Some(REQUIRED_FIELD));
        assert_eq!(errors.group, None);
    }

    #[test]
    fn rejects_unknown_or_malformed_group() {
        let unknown = PostForm::validate(&input("text", "8"), &groups()).unwrap_err();
        let malformed = PostForm::validate(&input("text", "seven"), &groups()).unwrap_err();

        assert_eq!(unknown.group.as_deref(), Some(INVALID_CHOICE));
        assert_eq!(malformed.group.as_deref(), Some(INVALID_CHOICE));
        assert_eq!(unknown.text, None);
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = PostForm::validate(&input("", "8"), &groups()).unwrap_err();

        assert!(errors.text.is_some());
        assert!(errors.group.is_some());
    }
}
