use super::*;

mod create;
mod find_by_id;
mod get_page;
mod update;
