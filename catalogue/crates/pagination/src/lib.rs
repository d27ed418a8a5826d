//! Page-number pagination primitives for the equipment catalogue.
//!
//! The catalogue list view shows a fixed number of items per page and a
//! small window of neighbouring page numbers. This crate keeps that
//! arithmetic in one place so the view layer only deals with typed pages.
//!
//! # Overview
//!
//! - [`PageNumber`] and [`PageSize`] are 1-based, non-zero newtypes.
//! - [`total_pages`], [`page_window`] and [`page_range`] are pure
//!   derivations over a collection length or slice.
//! - [`Paginator`] owns the current page and applies the `prev`, `next` and
//!   jump transitions.
//!
//! # Example
//!
//! ```
//! use pagination::{PageSize, Paginator};
//!
//! let items = ["a", "b", "c", "d", "e", "f", "g"];
//! let mut paginator = Paginator::new(PageSize::new(3).expect("non-zero"));
//!
//! assert_eq!(paginator.total_pages(items.len()), 3);
//! assert_eq!(paginator.window(&items), &["a", "b", "c"]);
//!
//! paginator.next_page(3).expect("page 2 exists");
//! assert_eq!(paginator.window(&items), &["d", "e", "f"]);
//! ```

mod error;
mod page;
mod paginator;
mod window;

pub use error::PaginationError;
pub use page::{PageNumber, PageSize};
pub use paginator::{DEFAULT_PAGE_RANGE_DELTA, PageControls, Paginator};
pub use window::{page_range, page_window, total_pages};
