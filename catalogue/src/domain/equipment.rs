//! Equipment catalogue entity and its value types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Validation errors returned by [`Equipment::new`] and the value types it
/// is built from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquipmentValidationError {
    /// The title was empty or whitespace only.
    #[error("equipment title must not be blank")]
    BlankTitle,
    /// The manufacturer was empty or whitespace only.
    #[error("equipment manufacturer must not be blank")]
    BlankManufacturer,
    /// The hourly price was negative, NaN, or infinite.
    #[error("price per hour must be a finite number ≥ 0")]
    InvalidPrice,
    /// Price text did not parse as a decimal number.
    #[error("price per hour `{value}` is not a number")]
    UnparsablePrice {
        /// Offending input, trimmed.
        value: String,
    },
}

/// Identifier text did not parse as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("equipment id `{value}` is not a valid UUID")]
pub struct InvalidEquipmentId {
    /// Offending input.
    pub value: String,
}

/// Stable identifier of a catalogue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EquipmentId(Uuid);

impl EquipmentId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Borrow the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EquipmentId {
    type Err = InvalidEquipmentId;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| InvalidEquipmentId {
                value: value.to_owned(),
            })
    }
}

/// Hourly hire price. Always finite and non-negative.
///
/// Negative zero is stored as zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PricePerHour(f64);

impl PricePerHour {
    /// Validate a numeric price.
    ///
    /// # Errors
    ///
    /// Returns [`EquipmentValidationError::InvalidPrice`] when `value` is
    /// negative, NaN, or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalogue::domain::PricePerHour;
    ///
    /// assert!(PricePerHour::new(2500.0).is_ok());
    /// assert!(PricePerHour::new(-1.0).is_err());
    /// assert!(PricePerHour::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, EquipmentValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(EquipmentValidationError::InvalidPrice);
        }
        // Clears the sign bit of -0.0.
        Ok(Self(value.abs()))
    }

    /// Parse price text as typed into the form. Surrounding whitespace is
    /// ignored and an empty string is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EquipmentValidationError::UnparsablePrice`] when the text is
    /// not a decimal number, or [`EquipmentValidationError::InvalidPrice`]
    /// when the number is out of range.
    pub fn parse(text: &str) -> Result<Self, EquipmentValidationError> {
        let trimmed = text.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| EquipmentValidationError::UnparsablePrice {
                value: trimmed.to_owned(),
            })?;
        Self::new(value)
    }

    /// Numeric value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Total order over prices, usable as a sort comparator.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for PricePerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Input payload for [`Equipment::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentDraft {
    /// Identifier to assign.
    pub id: EquipmentId,
    /// Title; surrounding whitespace is trimmed.
    pub title: String,
    /// Description, stored verbatim.
    pub description: String,
    /// Manufacturer; surrounding whitespace is trimmed.
    pub manufacturer: String,
    /// Hourly price.
    pub price_per_hour: PricePerHour,
}

/// A piece of hireable equipment.
///
/// Title and manufacturer are stored trimmed and are never blank. The
/// description is kept exactly as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    id: EquipmentId,
    title: String,
    description: String,
    manufacturer: String,
    price_per_hour: PricePerHour,
}

impl Equipment {
    /// Validate and construct an equipment item.
    ///
    /// # Errors
    ///
    /// Returns [`EquipmentValidationError`] when the title or manufacturer
    /// is blank.
    pub fn new(draft: EquipmentDraft) -> Result<Self, EquipmentValidationError> {
        Self::try_from(draft)
    }

    /// Identifier assigned when the item was created.
    #[must_use]
    pub const fn id(&self) -> EquipmentId {
        self.id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Free-text description; may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Manufacturer name.
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        self.manufacturer.as_str()
    }

    /// Hourly hire price.
    #[must_use]
    pub const fn price_per_hour(&self) -> PricePerHour {
        self.price_per_hour
    }
}

impl TryFrom<EquipmentDraft> for Equipment {
    type Error = EquipmentValidationError;

    fn try_from(draft: EquipmentDraft) -> Result<Self, Self::Error> {
        let title = non_blank(&draft.title).ok_or(EquipmentValidationError::BlankTitle)?;
        let manufacturer =
            non_blank(&draft.manufacturer).ok_or(EquipmentValidationError::BlankManufacturer)?;

        Ok(Self {
            id: draft.id,
            title,
            description: draft.description,
            manufacturer,
            price_per_hour: draft.price_per_hour,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
