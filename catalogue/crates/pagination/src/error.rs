//! Error types for pagination primitives.

use thiserror::Error;

/// Errors raised when constructing pages or moving between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page numbers are 1-based.
    #[error("page numbers start at 1")]
    ZeroPageNumber,

    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// Everything fits on one page, so there are no controls to follow.
    #[error("everything fits on one page")]
    SinglePage,

    /// The paginator is already on the first page.
    #[error("already on the first page")]
    NoPreviousPage,

    /// The paginator is already on, or past, the last page.
    #[error("no page after {current} of {total}")]
    NoNextPage {
        /// Current page number.
        current: usize,
        /// Total number of pages.
        total: usize,
    },

    /// The requested page lies outside `1..=total`.
    #[error("page {requested} is out of range (1..={total})")]
    PageOutOfRange {
        /// The page that was requested.
        requested: usize,
        /// Total number of pages.
        total: usize,
    },
}
