//! Lazy walk over the pages of one collection.

use std::collections::HashSet;

use crate::fetcher::{FetchError, PageFetcher};

/// One fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub url: String,
    pub count: Option<u64>,
    pub records: Vec<serde_json::Value>,
    pub next: Option<String>,
}

/// Follows `next` links from a starting URL, one fetch per call.
///
/// The walk ends after:
/// - a page whose `next` is missing, null or blank
/// - a page with no `results` field, yielded as an empty page
/// - a failed fetch, yielded once as an error
/// - a `next` link pointing at a page already visited in this walk
pub struct PageCursor<'a, F: ?Sized> {
    fetcher: &'a F,
    next: Option<String>,
    visited: HashSet<String>,
}

impl<'a, F: PageFetcher + ?Sized> PageCursor<'a, F> {
    pub fn new(fetcher: &'a F, start_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            next: Some(start_url.into()),
            visited: HashSet::new(),
        }
    }

    /// Fetch the next page, or `None` once the walk has ended.
    pub async fn next_page(&mut self) -> Option<Result<FetchedPage, FetchError>> {
        let url = self.next.take()?;

        if !self.visited.insert(url.clone()) {
            tracing::warn!("Page {url} was already visited; stopping pagination");
            return None;
        }

        let raw = match self.fetcher.fetch_page(&url).await {
            Ok(raw) => raw,
            Err(e) => return Some(Err(e)),
        };

        let Some(records) = raw.results else {
            tracing::warn!("Page {url} has no results; treating it as the last page");
            return Some(Ok(FetchedPage {
                url,
                count: raw.count,
                records: Vec::new(),
                next: None,
            }));
        };

        self.next = raw.next.filter(|next| !next.trim().is_empty());

        Some(Ok(FetchedPage {
            url,
            count: raw.count,
            records,
            next: self.next.clone(),
        }))
    }
}
