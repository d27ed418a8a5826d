//! Pure page derivations over a collection.

use crate::page::{PageNumber, PageSize};

/// Number of pages needed to show `item_count` items.
///
/// An empty collection has zero pages.
///
/// # Examples
///
/// ```
/// use pagination::{PageSize, total_pages};
///
/// let size = PageSize::new(3).expect("non-zero");
/// assert_eq!(total_pages(0, size), 0);
/// assert_eq!(total_pages(6, size), 2);
/// assert_eq!(total_pages(7, size), 3);
/// ```
#[must_use]
pub const fn total_pages(item_count: usize, page_size: PageSize) -> usize {
    item_count.div_ceil(page_size.get())
}

/// Slice of `items` shown on `page`.
///
/// Bounds past the end of the collection yield a shorter or empty slice
/// rather than an error.
#[must_use]
pub fn page_window<T>(items: &[T], page: PageNumber, page_size: PageSize) -> &[T] {
    let start = page.offset(page_size).min(items.len());
    let end = start.saturating_add(page_size.get()).min(items.len());
    items.get(start..end).unwrap_or_default()
}

/// Page numbers within `delta` of `current`, clamped to `1..=total_pages`.
///
/// The range is empty when there are no pages, or when `current` sits more
/// than `delta` pages past the end.
///
/// # Examples
///
/// ```
/// use pagination::{PageNumber, page_range};
///
/// let current = PageNumber::new(3).expect("non-zero");
/// let pages: Vec<usize> = page_range(current, 5, 1).into_iter().map(PageNumber::get).collect();
/// assert_eq!(pages, vec![2, 3, 4]);
/// ```
#[must_use]
pub fn page_range(current: PageNumber, total_pages: usize, delta: usize) -> Vec<PageNumber> {
    let first = current.get().saturating_sub(delta).max(1);
    let last = current.get().saturating_add(delta).min(total_pages);
    (first..=last)
        .filter_map(|number| PageNumber::new(number).ok())
        .collect()
}
