//! Typed page numbers and page sizes.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::PaginationError;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Validate and construct a page number.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageNumber`] when `value` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{PageNumber, PaginationError};
    ///
    /// assert_eq!(PageNumber::new(2).map(PageNumber::get), Ok(2));
    /// assert_eq!(PageNumber::new(0), Err(PaginationError::ZeroPageNumber));
    /// ```
    pub const fn new(value: usize) -> Result<Self, PaginationError> {
        match NonZeroUsize::new(value) {
            Some(page) => Ok(Self(page)),
            None => Err(PaginationError::ZeroPageNumber),
        }
    }

    /// Return the page number as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Return the page before this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match Self::new(self.get().saturating_sub(1)) {
            Ok(page) => Some(page),
            Err(_) => None,
        }
    }

    /// Return the page after this one, if it is representable.
    #[must_use]
    pub const fn following(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(page) => Some(Self(page)),
            None => None,
        }
    }

    /// Index of the first item on this page.
    #[must_use]
    pub const fn offset(self, page_size: PageSize) -> usize {
        self.get().saturating_sub(1).saturating_mul(page_size.get())
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = PaginationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Number of items shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Validate and construct a page size.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `value` is zero.
    pub const fn new(value: usize) -> Result<Self, PaginationError> {
        match NonZeroUsize::new(value) {
            Some(size) => Ok(Self(size)),
            None => Err(PaginationError::ZeroPageSize),
        }
    }

    /// Construct a page size from a value already known to be non-zero.
    #[must_use]
    pub const fn from_non_zero(value: NonZeroUsize) -> Self {
        Self(value)
    }

    /// Return the page size as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
