//! Data transfer objects handed to templates and received from forms.

pub mod group;
pub mod page;
pub mod post;
pub mod user;
pub mod view;
