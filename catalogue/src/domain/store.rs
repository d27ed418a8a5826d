//! In-memory catalogue of equipment in insertion order.

use tracing::debug;

use super::{Equipment, EquipmentId, EquipmentSink};

/// Ordered collection of every item in the catalogue.
///
/// Items are only ever appended. Their position is the insertion order used
/// by the "insertion" sort key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueStore {
    items: Vec<Equipment>,
}

impl CatalogueStore {
    /// Empty catalogue.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Catalogue holding `items` in the given order.
    #[must_use]
    pub const fn from_items(items: Vec<Equipment>) -> Self {
        Self { items }
    }

    /// Add an item at the end.
    pub fn append(&mut self, item: Equipment) {
        debug!(
            id = %item.id(),
            title = item.title(),
            position = self.items.len(),
            "equipment appended"
        );
        self.items.push(item);
    }

    /// Every item, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Equipment] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalogue holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look an item up by id.
    #[must_use]
    pub fn find(&self, id: EquipmentId) -> Option<&Equipment> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl EquipmentSink for CatalogueStore {
    fn append(&mut self, item: Equipment) {
        Self::append(self, item);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{EquipmentDraft, PricePerHour};

    fn item(n: u128, title: &str) -> Equipment {
        Equipment::new(EquipmentDraft {
            id: EquipmentId::from_uuid(Uuid::from_u128(n)),
            title: title.to_owned(),
            description: String::new(),
            manufacturer: "JCB".to_owned(),
            price_per_hour: PricePerHour::new(1000.0).expect("valid price"),
        })
        .expect("valid equipment")
    }

    #[test]
    fn appends_in_order() {
        let mut store = CatalogueStore::new();
        assert!(store.is_empty());

        store.append(item(1, "Crane"));
        store.append(item(2, "Bulldozer"));

        let titles: Vec<&str> = store.items().iter().map(Equipment::title).collect();
        assert_eq!(titles, vec!["Crane", "Bulldozer"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn accepts_items_through_the_sink_port() {
        let mut store = CatalogueStore::from_items(vec![item(1, "Crane")]);

        EquipmentSink::append(&mut store, item(2, "Loader crane"));

        assert_eq!(store.len(), 2);
    }

    #[rstest]
    #[case(2, Some("Bulldozer"))]
    #[case(9, None)]
    fn finds_items_by_id(#[case] n: u128, #[case] expected: Option<&str>) {
        let store = CatalogueStore::from_items(vec![item(1, "Crane"), item(2, "Bulldozer")]);

        let found = store.find(EquipmentId::from_uuid(Uuid::from_u128(n)));

        assert_eq!(found.map(Equipment::title), expected);
    }
}
