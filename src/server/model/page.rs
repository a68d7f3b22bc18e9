//! Page-number pagination.
//!
//! Page numbers are 1-based. A missing or non-numeric page request selects the
//! first page, a numeric request outside the available range selects the last
//! page. A listing always has at least one (possibly empty) page.

use crate::model::page::PageDto;

/// Number of posts per page unless configured otherwise.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Returns how many pages `total` items fill at `per_page` items each.
pub fn num_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 1;
    }

    total.div_ceil(per_page).max(1)
}

/// Resolves the raw `?page=` query value against the number of available pages.
///
/// # Arguments
/// - `requested` - Raw query value, `None` when the parameter is absent
/// - `num_pages` - Number of available pages (at least 1)
///
/// # Returns
/// - `u64` - A page number within `1..=num_pages`
pub fn resolve_page_number(requested: Option<&str>, num_pages: u64) -> u64 {
    let Some(Ok(number)) = requested.map(|raw| raw.trim().parse::<i64>()) else {
        return 1;
    };

    match u64::try_from(number) {
        Ok(number) if (1..=num_pages).contains(&number) => number,
        _ => num_pages,
    }
}

/// One page of items along with its position in the full listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub number: u64,
    pub num_pages: u64,
    /// Number of items across all pages.
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    /// Converts the page to a DTO, mapping each item with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let has_previous = self.has_previous();
        let has_next = self.has_next();

        PageDto {
            object_list: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            has_previous,
            has_next,
            has_other_pages: has_previous || has_next,
            previous_page_number: has_previous.then(|| self.number - 1),
            next_page_number: has_next.then(|| self.number + 1),
        }
    }
}
