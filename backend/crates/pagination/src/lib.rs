//! Page-number pagination primitives for backend listing endpoints.
//!
//! Listings that are derived in memory (filtered and sorted per request)
//! cannot lean on database offsets, so this crate windows an already-ordered
//! collection instead. Page indices are 1-based. A page beyond the end of the
//! collection is not an error: it yields an empty window with
//! `has_next = false`.
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 2).expect("valid request");
//! let page = Page::from_ordered(vec!["a", "b", "c"], request);
//! assert_eq!(page.items(), &["c"]);
//! assert_eq!(page.total_pages(), 2);
//! assert!(!page.has_next());
//! assert!(page.has_prev());
//! ```

use serde::Serialize;

/// Default number of items per page for listing endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Errors raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// Pages are numbered from 1.
    #[error("page must be at least 1 (got {page})")]
    PageBelowOne {
        /// Rejected page number.
        page: u32,
    },
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Validated 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Build a request for `page` (1-based) holding `page_size` items.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::PageBelowOne`] when `page` is zero and
    /// [`PageRequestError::ZeroPageSize`] when `page_size` is zero.
    pub const fn new(page: u32, page_size: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::PageBelowOne { page });
        }
        if page_size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        Ok(Self { page, page_size })
    }

    /// First page using [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Requested page number (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items preceding the requested window.
    ///
    /// Saturates at `usize::MAX` so absurd page numbers clamp to an empty
    /// window rather than overflowing.
    #[must_use]
    pub fn offset(&self) -> usize {
        let preceding_pages = u64::from(self.page.saturating_sub(1));
        let offset = preceding_pages.saturating_mul(u64::from(self.page_size));
        usize::try_from(offset).unwrap_or(usize::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One window over an ordered collection plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    current_page: u32,
    page_size: u32,
    total_items: usize,
    total_pages: u32,
}

impl<T> Page<T> {
    /// Slice `ordered` down to the window described by `request`.
    ///
    /// The collection must already be in presentation order. Window bounds
    /// are clamped to the collection length.
    #[must_use]
    pub fn from_ordered(ordered: Vec<T>, request: PageRequest) -> Self {
        let total_items = ordered.len();
        let page_size = usize::try_from(request.page_size()).unwrap_or(usize::MAX);
        let total_pages = u32::try_from(total_items.div_ceil(page_size)).unwrap_or(u32::MAX);
        let items = ordered
            .into_iter()
            .skip(request.offset())
            .take(page_size)
            .collect();

        Self {
            items,
            current_page: request.page(),
            page_size: request.page_size(),
            total_items,
            total_pages,
        }
    }

    /// Items in the current window.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Consume the page and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Requested page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Items per page used to build this window.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Size of the full collection before windowing.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`; zero for an empty collection.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether a later page holds items.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Transform each item while keeping the window metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
