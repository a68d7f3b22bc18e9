//! Group domain models and parameters.

use crate::model::group::{GroupDto, GroupOptionDto};

/// A community posts can be published into.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub title: String,
    /// Unique URL-safe identifier, used in `/group/{slug}/`.
    pub slug: String,
    pub description: String,
}

impl Group {
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
        }
    }

    /// Converts the group into a form `<select>` option.
    ///
    /// # Arguments
    /// - `selected` - Id of the group currently chosen on the form, if any
    pub fn into_option_dto(self, selected: Option<i32>) -> GroupOptionDto {
        GroupOptionDto {
            selected: selected == Some(self.id),
            id: self.id,
            title: self.title,
        }
    }

    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
        }
    }
}

