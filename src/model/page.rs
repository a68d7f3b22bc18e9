use serde::{Deserialize, Serialize};

/// One page of a paginated listing, shaped for the `paginator` partial.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PageDto<T> {
    pub object_list: Vec<T>,
    /// 1-based page number.
    pub number: u64,
    pub num_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub has_other_pages: bool,
    pub previous_page_number: Option<u64>,
    pub next_page_number: Option<u64>,
}
