//! Equipment record validation mirroring catalogue constraints.
//!
//! These rules match the catalogue's `Equipment` type in
//! `catalogue/src/domain/equipment.rs`. Keeping them in sync ensures seeded
//! items are always accepted when the catalogue converts them at startup.
//!
//! # Validation Rules
//!
//! - Title and manufacturer must not be empty once trimmed
//! - Price per hour must be a finite number no smaller than zero
//! - Description is free text and never validated

use crate::error::ItemDefect;

/// Returns `true` if `value` has content once surrounding whitespace is
/// trimmed.
///
/// # Examples
///
/// ```
/// use example_data::is_present;
///
/// assert!(is_present("Liebherr"));
/// assert!(!is_present("   "));
/// ```
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns `true` if `price` is an acceptable hourly price.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_price;
///
/// assert!(is_valid_price(0.0));
/// assert!(is_valid_price(2500.0));
/// assert!(!is_valid_price(-5.0));
/// assert!(!is_valid_price(f64::NAN));
/// ```
#[must_use]
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// Checks an item's fields in field order and reports the first defect.
pub(crate) fn check_item(
    title: &str,
    manufacturer: &str,
    price_per_hour: f64,
) -> Result<(), ItemDefect> {
    if !is_present(title) {
        return Err(ItemDefect::BlankTitle);
    }
    if !is_present(manufacturer) {
        return Err(ItemDefect::BlankManufacturer);
    }
    if !is_valid_price(price_per_hour) {
        return Err(ItemDefect::InvalidPrice);
    }
    Ok(())
}
