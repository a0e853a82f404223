//! Read-side paging.

use serde::{Deserialize, Serialize};

/// Page size used when a query does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// A paged, optionally filtered, read of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Zero-based page number.
    pub page: usize,
    pub size: usize,
    /// Case-insensitive "name contains" filter.
    pub search: Option<String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl PageQuery {
    pub fn new(page: usize, size: usize, search: Option<String>) -> Self {
        Self { page, size, search }
    }

    /// Whether a record named `name` passes the search filter.
    pub fn matches(&self, name: &str) -> bool {
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
        }
    }

    fn effective_size(&self) -> usize {
        self.size.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    pub number: usize,
    pub size: usize,
}

impl<T> Page<T> {
    /// Cut the requested page out of the full, already filtered and ordered,
    /// list of matches.
    pub fn from_matches(matches: Vec<T>, query: &PageQuery) -> Self {
        let size = query.effective_size();
        let total_elements = matches.len();
        let total_pages = total_elements.div_ceil(size);
        let content = matches
            .into_iter()
            .skip(query.page.saturating_mul(size))
            .take(size)
            .collect();

        Self {
            content,
            total_elements,
            total_pages,
            number: query.page,
            size,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        }
    }
}
