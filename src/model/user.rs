use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    /// Formatted as `"%d %B %Y"`.
    pub date_joined: String,
}
