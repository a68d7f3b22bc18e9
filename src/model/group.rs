use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Entry of the group `<select>` on the post form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupOptionDto {
    pub id: i32,
    pub title: String,
    pub selected: bool,
}
