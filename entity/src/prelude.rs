pub use super::group::Entity as Group;
pub use super::post::Entity as Post;
pub use super::user::Entity as User;
