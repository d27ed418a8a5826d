//! Current-page state and its transitions.

use crate::error::PaginationError;
use crate::page::{PageNumber, PageSize};
use crate::window::{page_range, page_window, total_pages};

/// Default number of neighbouring page numbers shown either side of the
/// current page.
pub const DEFAULT_PAGE_RANGE_DELTA: usize = 1;

/// Tracks the current page of a paged view.
///
/// The paginator does not own the collection, so it never learns about
/// changes to its length on its own. A current page left beyond the last
/// page after the collection shrinks, or after the view is re-sorted, stays
/// where it is; the window is then empty until the caller moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: PageSize,
    current: PageNumber,
    delta: usize,
}

/// Pagination controls for one render of a paged view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    /// Whether a "previous" control is offered.
    pub previous: bool,
    /// Neighbouring page numbers, in ascending order.
    pub pages: Vec<PageNumber>,
    /// The current page, which may or may not appear in `pages`.
    pub current: PageNumber,
    /// Whether a "next" control is offered.
    pub next: bool,
}

impl Paginator {
    /// Create a paginator positioned on the first page.
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current: PageNumber::FIRST,
            delta: DEFAULT_PAGE_RANGE_DELTA,
        }
    }

    /// Override how many neighbouring page numbers the controls expose.
    #[must_use]
    pub const fn with_delta(mut self, delta: usize) -> Self {
        self.delta = delta;
        self
    }

    /// The current page.
    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.current
    }

    /// Total pages for a collection of `item_count` items.
    #[must_use]
    pub const fn total_pages(&self, item_count: usize) -> usize {
        total_pages(item_count, self.page_size)
    }

    /// Items shown on the current page.
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_window(items, self.current, self.page_size)
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current.get() > 1
    }

    /// Whether a next page exists given `total_pages`.
    #[must_use]
    pub const fn has_next(&self, total_pages: usize) -> bool {
        self.current.get() < total_pages
    }

    /// Move to the previous page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::SinglePage`] when `total_pages` is at most
    /// one, and [`PaginationError::NoPreviousPage`] on the first page. The
    /// current page is left unchanged.
    pub fn previous_page(&mut self, total_pages: usize) -> Result<PageNumber, PaginationError> {
        if total_pages <= 1 {
            return Err(PaginationError::SinglePage);
        }
        let previous = self.current.previous().ok_or(PaginationError::NoPreviousPage)?;
        self.current = previous;
        Ok(previous)
    }

    /// Move to the next page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::SinglePage`] when `total_pages` is at most
    /// one, and [`PaginationError::NoNextPage`] when the current page is the
    /// last one (or beyond it). The current page is left unchanged.
    pub fn next_page(&mut self, total_pages: usize) -> Result<PageNumber, PaginationError> {
        if total_pages <= 1 {
            return Err(PaginationError::SinglePage);
        }
        let no_next = PaginationError::NoNextPage {
            current: self.current.get(),
            total: total_pages,
        };
        if !self.has_next(total_pages) {
            return Err(no_next);
        }
        let following = self.current.following().ok_or(no_next)?;
        self.current = following;
        Ok(following)
    }

    /// Jump straight to `page`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::PageOutOfRange`] when `page` exceeds
    /// `total_pages`; the current page is left unchanged.
    pub fn go_to(&mut self, page: PageNumber, total_pages: usize) -> Result<(), PaginationError> {
        if page.get() > total_pages {
            return Err(PaginationError::PageOutOfRange {
                requested: page.get(),
                total: total_pages,
            });
        }
        self.current = page;
        Ok(())
    }

    /// Controls to render, or `None` when everything fits on one page.
    #[must_use]
    pub fn controls(&self, total_pages: usize) -> Option<PageControls> {
        if total_pages <= 1 {
            return None;
        }
        Some(PageControls {
            previous: self.has_previous(),
            pages: page_range(self.current, total_pages, self.delta),
            current: self.current,
            next: self.has_next(total_pages),
        })
    }
}
