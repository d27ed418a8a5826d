//! Catalogue domain: equipment records, the add-equipment form, the derived
//! list view and the in-memory store.
//!
//! Adapters drive these types; nothing in this module performs I/O.

mod collation;
mod equipment;
mod form;
mod listing;
pub mod ports;
mod store;

pub use collation::{TitleCollator, collate, fold_for_search};
pub use equipment::{
    Equipment, EquipmentDraft, EquipmentId, EquipmentValidationError, InvalidEquipmentId,
    PricePerHour,
};
pub use form::{EquipmentForm, FieldError, FieldErrors, FormDraft, FormField, UnknownFormField};
pub use listing::{ITEMS_PER_PAGE, ListPage, ListView, SortKey, sorted_view};
#[cfg(test)]
pub use ports::{MockEquipmentSink, MockIdGenerator};
pub use ports::{EquipmentSink, IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use store::CatalogueStore;
