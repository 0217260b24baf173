//! Search, filter and pagination pipeline.
//!
//! # Responsibility
//! - Compute the visible page of records plus pagination metadata.
//! - Keep search/page input rules in one place: a search change resets to
//!   page 1, an out-of-range page request is rejected.
//!
//! # Invariants
//! - Filtering preserves collection order.
//! - Derivation is pure; an out-of-range page yields an empty slice.

use crate::model::employee::Employee;

/// Page size the list screen uses unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One derived page of the filtered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page_items: Vec<Employee>,
    pub page_count: u32,
    pub effective_page: u32,
}

/// Entry in the condensed page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Derives one page: case-insensitive any-field filter, then slice.
///
/// The term matches against first name, last name, email, department and
/// position; an empty term matches everything.
pub fn derive_page(
    collection: &[Employee],
    search_term: &str,
    page: u32,
    page_size: u32,
) -> PageView {
    let filtered = filter_collection(collection, search_term);
    let page_count = count_pages(filtered.len(), page_size);

    let page_items = if page == 0 || page_size == 0 {
        Vec::new()
    } else {
        let start = (page as usize - 1).saturating_mul(page_size as usize);
        filtered
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect()
    };

    PageView {
        page_items,
        page_count,
        effective_page: page,
    }
}

/// Search and pagination input state owned by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    search: String,
    page: u32,
    page_size: u32,
}

impl ListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Stores a new search term and unconditionally resets to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Moves to `page` if it lies in `[1, page_count]` for the current
    /// filter; otherwise leaves the state untouched and returns `false`.
    pub fn set_page(&mut self, page: u32, collection: &[Employee]) -> bool {
        let page_count = count_pages(
            filter_collection(collection, &self.search).len(),
            self.page_size,
        );
        if page < 1 || page > page_count {
            return false;
        }

        self.page = page;
        true
    }

    /// Derives the currently visible page from the collection.
    pub fn derive(&self, collection: &[Employee]) -> PageView {
        derive_page(collection, &self.search, self.page, self.page_size)
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Builds the condensed page strip: first and last page, current ±1, with an
/// ellipsis marker over any wider gap. Empty when there is at most one page.
pub fn page_links(page_count: u32, current: u32) -> Vec<PageLink> {
    if page_count <= 1 {
        return Vec::new();
    }

    let mut links = Vec::new();
    for i in 1..=page_count {
        if i == 1 || i == page_count || i.abs_diff(current) <= 1 {
            links.push(PageLink::Page(i));
        } else if (i == 2 && current > 3) || (i == page_count - 1 && current < page_count - 2) {
            links.push(PageLink::Ellipsis);
        }
    }
    links
}

fn filter_collection<'a>(collection: &'a [Employee], search_term: &str) -> Vec<&'a Employee> {
    if search_term.is_empty() {
        return collection.iter().collect();
    }

    let term = search_term.to_lowercase();
    collection
        .iter()
        .filter(|record| matches_term(record, &term))
        .collect()
}

fn matches_term(record: &Employee, lowercase_term: &str) -> bool {
    record.first_name.to_lowercase().contains(lowercase_term)
        || record.last_name.to_lowercase().contains(lowercase_term)
        || record.email.to_lowercase().contains(lowercase_term)
        || record
            .department
            .as_str()
            .to_lowercase()
            .contains(lowercase_term)
        || record
            .position
            .as_str()
            .to_lowercase()
            .contains(lowercase_term)
}

fn count_pages(filtered_len: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    filtered_len.div_ceil(page_size as usize) as u32
}
