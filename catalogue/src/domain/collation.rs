//! Locale-aware ordering for item titles.
//!
//! Titles compare under the CLDR root collation: punctuation and symbols
//! before digits, digits before letters, then accents, then case with
//! lowercase first. Ligatures such as `æ` and `ß` sort with their expansions.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compares titles with the root collation.
///
/// Falls back to code-point order if the collation data cannot be loaded.
pub struct TitleCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl TitleCollator {
    /// Load the root collation.
    #[must_use]
    pub fn root() -> Self {
        let collator = Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
            .inspect_err(|error| {
                warn!(%error, "root collation unavailable; titles sort by code point");
            })
            .ok();
        Self { collator }
    }

    /// Compare two titles.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator
            .as_ref()
            .map_or_else(|| a.cmp(b), |collator| collator.compare(a, b))
    }
}

impl fmt::Debug for TitleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleCollator")
            .field("root", &self.collator.is_some())
            .finish()
    }
}

/// Compare two strings with the catalogue's title collation.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use catalogue::domain::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("école", "ecole"), Ordering::Greater);
/// assert_eq!(collate("Éclair", "eclipse"), Ordering::Less);
/// ```
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    TitleCollator::root().compare(a, b)
}

/// Fold `text` for case- and accent-insensitive substring matching.
#[must_use]
pub fn fold_for_search(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
