//! Generated equipment seed types.
//!
//! This module defines the output types from equipment generation. These
//! types are independent of catalogue domain types to avoid circular
//! dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated example equipment record.
///
/// This type contains every field needed to create a catalogue item. It is
/// designed to be converted into the catalogue's domain type at the point of
/// use, where the record constraints are checked again.
///
/// # Example
///
/// ```
/// use example_data::ExampleEquipmentSeed;
/// use uuid::Uuid;
///
/// let item = ExampleEquipmentSeed {
///     id: Uuid::new_v4(),
///     title: "Excavator JCB 220".to_owned(),
///     description: "Reliable excavator for earthworks.".to_owned(),
///     manufacturer: "JCB".to_owned(),
///     price_per_hour: 2500.0,
/// };
///
/// assert_eq!(item.manufacturer, "JCB");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleEquipmentSeed {
    /// Unique identifier for the item.
    pub id: Uuid,
    /// Human-readable title.
    pub title: String,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Hire price per hour.
    pub price_per_hour: f64,
}
