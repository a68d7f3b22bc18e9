//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::user::UserDto, server::model::DISPLAY_DATE_FORMAT};

/// A registered blog user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique username, used in `/profile/{username}/`.
    pub username: String,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for templates.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            date_joined: self.date_joined.format(DISPLAY_DATE_FORMAT).to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            date_joined: entity.date_joined,
        }
    }
}

