//! Form controller for adding equipment.
//!
//! The form keeps four draft values as free text plus the errors of the last
//! submission. Accepted items leave through an [`EquipmentSink`]; the form
//! never touches the catalogue directly.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

use super::{
    Equipment, EquipmentDraft, EquipmentId, EquipmentSink, EquipmentValidationError,
    IdGenerator, PricePerHour,
};

/// Editable fields of the equipment form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Item title.
    Title,
    /// Free-text description.
    Description,
    /// Manufacturer name.
    Manufacturer,
    /// Hourly price, entered as text.
    PricePerHour,
}

impl FormField {
    /// Every field in display order.
    pub const ALL: [Self; 4] = [
        Self::Title,
        Self::Description,
        Self::Manufacturer,
        Self::PricePerHour,
    ];

    /// Name accepted by the `set` command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Manufacturer => "manufacturer",
            Self::PricePerHour => "price",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Manufacturer => "Manufacturer",
            Self::PricePerHour => "Price per hour",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a field name is not one of the form's fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{name}`; expected title, description, manufacturer or price")]
pub struct UnknownFormField {
    /// Name as typed.
    pub name: String,
}

impl FromStr for FormField {
    type Err = UnknownFormField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "manufacturer" => Ok(Self::Manufacturer),
            "price" | "price_per_hour" | "price-per-hour" | "priceperhour" => {
                Ok(Self::PricePerHour)
            }
            _ => Err(UnknownFormField {
                name: value.to_owned(),
            }),
        }
    }
}

/// Validation failure for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Title was empty after trimming.
    #[error("title required")]
    TitleRequired,
    /// Manufacturer was empty after trimming.
    #[error("manufacturer required")]
    ManufacturerRequired,
    /// Price was empty, unparsable, non-finite, or negative.
    #[error("price must be a number ≥ 0")]
    InvalidPrice,
}

/// Errors keyed by field. Empty when the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    /// Whether no field is in error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields in error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Error recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Field and error pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, error)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl From<EquipmentValidationError> for FieldErrors {
    fn from(value: EquipmentValidationError) -> Self {
        let mut errors = Self::default();
        match value {
            EquipmentValidationError::BlankTitle => {
                errors.insert(FormField::Title, FieldError::TitleRequired);
            }
            EquipmentValidationError::BlankManufacturer => {
                errors.insert(FormField::Manufacturer, FieldError::ManufacturerRequired);
            }
            EquipmentValidationError::InvalidPrice
            | EquipmentValidationError::UnparsablePrice { .. } => {
                errors.insert(FormField::PricePerHour, FieldError::InvalidPrice);
            }
        }
        errors
    }
}

/// Raw text of the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    /// Title as typed.
    pub title: String,
    /// Description as typed.
    pub description: String,
    /// Manufacturer as typed.
    pub manufacturer: String,
    /// Price text as typed.
    pub price_per_hour: String,
}

impl FormDraft {
    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Manufacturer => &self.manufacturer,
            FormField::PricePerHour => &self.price_per_hour,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Manufacturer => &mut self.manufacturer,
            FormField::PricePerHour => &mut self.price_per_hour,
        }
    }
}

/// Draft values and validation state for the "add equipment" form.
///
/// # Examples
///
/// ```
/// use catalogue::domain::{
///     CatalogueStore, EquipmentForm, FieldError, FormField, SequentialIdGenerator,
/// };
///
/// let mut store = CatalogueStore::new();
/// let mut ids = SequentialIdGenerator::default();
/// let mut form = EquipmentForm::new();
///
/// form.set_field(FormField::Title, "Tower crane");
/// form.set_field(FormField::Manufacturer, "Potain");
/// form.set_field(FormField::PricePerHour, "-5");
/// let errors = form.submit(&mut store, &mut ids).expect_err("negative price");
/// assert_eq!(errors.get(FormField::PricePerHour), Some(FieldError::InvalidPrice));
/// assert!(store.is_empty());
///
/// form.set_field(FormField::PricePerHour, "3100");
/// let id = form.submit(&mut store, &mut ids).expect("valid form");
/// assert_eq!(store.find(id).map(|item| item.title()), Some("Tower crane"));
/// assert!(form.errors().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentForm {
    draft: FormDraft,
    errors: FieldErrors,
}

impl EquipmentForm {
    /// Empty form with no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft values.
    #[must_use]
    pub const fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Errors from the most recent rejected submission.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Replace the text of one field. Recorded errors are left in place
    /// until the next submission.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.draft.slot(field) = value.into();
    }

    /// Check the draft without changing any state.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.draft.title.trim().is_empty() {
            errors.insert(FormField::Title, FieldError::TitleRequired);
        }
        if self.draft.manufacturer.trim().is_empty() {
            errors.insert(FormField::Manufacturer, FieldError::ManufacturerRequired);
        }
        if PricePerHour::parse(&self.draft.price_per_hour).is_err() {
            errors.insert(FormField::PricePerHour, FieldError::InvalidPrice);
        }
        errors
    }

    /// Validate the draft and, when it is valid, hand a new item to `sink`.
    ///
    /// On success the item is appended exactly once, the draft and errors
    /// are cleared, and the new id is returned. On failure the errors are
    /// recorded on the form, the draft is kept, and nothing is appended.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldErrors`] of every invalid field.
    pub fn submit<S, G>(&mut self, sink: &mut S, ids: &mut G) -> Result<EquipmentId, FieldErrors>
    where
        S: EquipmentSink + ?Sized,
        G: IdGenerator + ?Sized,
    {
        let item = match self.build(ids) {
            Ok(item) => item,
            Err(errors) => {
                warn!(%errors, "equipment submission rejected");
                self.errors = errors.clone();
                return Err(errors);
            }
        };

        let id = item.id();
        info!(%id, title = item.title(), "equipment submitted");
        sink.append(item);
        self.draft = FormDraft::default();
        self.errors = FieldErrors::default();
        Ok(id)
    }

    fn build<G>(&self, ids: &mut G) -> Result<Equipment, FieldErrors>
    where
        G: IdGenerator + ?Sized,
    {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let price_per_hour = PricePerHour::parse(&self.draft.price_per_hour)?;
        let item = Equipment::new(EquipmentDraft {
            id: ids.next_id(),
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            manufacturer: self.draft.manufacturer.clone(),
            price_per_hour,
        })?;
        Ok(item)
    }
}
