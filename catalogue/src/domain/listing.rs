//! Derived list view: sorting, filtering and paging over the catalogue.
//!
//! Nothing here mutates the catalogue. Every render recomputes the sorted
//! view and the visible window from the current items.

use std::fmt;
use std::num::NonZeroUsize;

use pagination::{PageControls, PageNumber, PageSize, PaginationError, Paginator};
use tracing::warn;

use super::Equipment;
use super::collation::{TitleCollator, fold_for_search};

/// Items shown per page: three.
pub const ITEMS_PER_PAGE: PageSize =
    PageSize::from_non_zero(NonZeroUsize::MIN.saturating_add(2));

/// Order in which the list shows items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Title, ascending, locale-aware.
    #[default]
    Title,
    /// Price per hour, cheapest first.
    PriceAsc,
    /// Price per hour, dearest first.
    PriceDesc,
    /// The order items were added in.
    Insertion,
}

impl SortKey {
    /// Resolve a selector such as `price-asc`.
    ///
    /// Unrecognised selectors fall back to [`SortKey::Insertion`], so a bad
    /// selector shows items in the order they were added.
    ///
    /// ```
    /// use catalogue::domain::SortKey;
    ///
    /// assert_eq!(SortKey::from_selector("price-desc"), SortKey::PriceDesc);
    /// assert_eq!(SortKey::from_selector("priceAsc"), SortKey::PriceAsc);
    /// assert_eq!(SortKey::from_selector("colour"), SortKey::Insertion);
    /// ```
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        Self::parse(selector).unwrap_or_else(|| {
            warn!(selector, "unrecognised sort selector; keeping insertion order");
            Self::Insertion
        })
    }

    /// Resolve a selector, returning `None` when it is not recognised.
    #[must_use]
    pub fn parse(selector: &str) -> Option<Self> {
        let normalised: String = selector
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalised.as_str() {
            "title" => Some(Self::Title),
            "priceasc" => Some(Self::PriceAsc),
            "pricedesc" => Some(Self::PriceDesc),
            "insertion" => Some(Self::Insertion),
            _ => None,
        }
    }

    /// Canonical selector text.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Insertion => "insertion",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title (A→Z)",
            Self::PriceAsc => "Price per hour (low→high)",
            Self::PriceDesc => "Price per hour (high→low)",
            Self::Insertion => "Order added",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Sorted references to `items`. The input is left untouched and ties keep
/// their insertion order in every mode.
///
/// ```
/// use catalogue::domain::{SortKey, sorted_view};
///
/// let sorted = sorted_view(&[], SortKey::Title);
/// assert!(sorted.is_empty());
/// ```
#[must_use]
pub fn sorted_view(items: &[Equipment], key: SortKey) -> Vec<&Equipment> {
    let mut view: Vec<&Equipment> = items.iter().collect();
    sort_in_place(&mut view, key);
    view
}

fn sort_in_place(view: &mut [&Equipment], key: SortKey) {
    match key {
        SortKey::Title => {
            let collator = TitleCollator::root();
            // `sort_by` is stable, so equal titles keep insertion order.
            view.sort_by(|a, b| collator.compare(a.title(), b.title()));
        }
        SortKey::PriceAsc => {
            view.sort_by(|a, b| a.price_per_hour().total_cmp(&b.price_per_hour()));
        }
        SortKey::PriceDesc => {
            view.sort_by(|a, b| b.price_per_hour().total_cmp(&a.price_per_hour()));
        }
        SortKey::Insertion => {}
    }
}

/// One rendered page of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<'a> {
    /// Sort key in force.
    pub sort_key: SortKey,
    /// Items on the current page, in display order.
    pub items: Vec<&'a Equipment>,
    /// Items matching the filter across all pages.
    pub total_items: usize,
    /// Pages needed for `total_items`.
    pub total_pages: usize,
    /// The current page, possibly beyond `total_pages`.
    pub current_page: PageNumber,
    /// Controls to show, or `None` when everything fits on one page.
    pub controls: Option<PageControls>,
}

/// Sort key, title filter and current page of the list.
///
/// Changing the sort key or filter, or adding items, leaves the current
/// page where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    sort_key: SortKey,
    filter: Option<String>,
    paginator: Paginator,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    /// Sorted by title, unfiltered, on page one.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sort_key: SortKey::Title,
            filter: None,
            paginator: Paginator::new(ITEMS_PER_PAGE),
        }
    }

    /// Current sort key.
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Change the sort key.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Active title filter.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Set the title filter; blank text clears it.
    pub fn set_filter(&mut self, filter: Option<&str>) {
        self.filter = filter
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
    }

    /// Current page number.
    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.paginator.current_page()
    }

    /// Items passing the filter, sorted by the current key.
    #[must_use]
    pub fn visible<'a>(&self, items: &'a [Equipment]) -> Vec<&'a Equipment> {
        let mut view: Vec<&Equipment> = self.filter.as_deref().map_or_else(
            || items.iter().collect(),
            |filter| {
                let needle = fold_for_search(filter);
                items
                    .iter()
                    .filter(|item| fold_for_search(item.title()).contains(&needle))
                    .collect()
            },
        );
        sort_in_place(&mut view, self.sort_key);
        view
    }

    /// Pages needed for the visible items.
    #[must_use]
    pub fn total_pages(&self, items: &[Equipment]) -> usize {
        self.paginator.total_pages(self.visible(items).len())
    }

    /// Move back one page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::NoPreviousPage`] on the first page, and
    /// [`PaginationError::SinglePage`] when the controls are hidden.
    pub fn previous_page(&mut self, items: &[Equipment]) -> Result<PageNumber, PaginationError> {
        let total = self.total_pages(items);
        self.paginator.previous_page(total)
    }

    /// Move forward one page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::NoNextPage`] on or beyond the last page,
    /// and [`PaginationError::SinglePage`] when the controls are hidden.
    pub fn next_page(&mut self, items: &[Equipment]) -> Result<PageNumber, PaginationError> {
        let total = self.total_pages(items);
        self.paginator.next_page(total)
    }

    /// Jump to `page`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::PageOutOfRange`] when `page` is beyond the
    /// last page.
    pub fn go_to(&mut self, page: PageNumber, items: &[Equipment]) -> Result<(), PaginationError> {
        let total = self.total_pages(items);
        self.paginator.go_to(page, total)
    }

    /// Derive the current page of `items`.
    #[must_use]
    pub fn derive<'a>(&self, items: &'a [Equipment]) -> ListPage<'a> {
        let visible = self.visible(items);
        let total_pages = self.paginator.total_pages(visible.len());
        ListPage {
            sort_key: self.sort_key,
            items: self.paginator.window(&visible).to_vec(),
            total_items: visible.len(),
            total_pages,
            current_page: self.paginator.current_page(),
            controls: self.paginator.controls(total_pages),
        }
    }
}
