//! Seed registry types and JSON parsing.
//!
//! This module defines the seed registry structure that holds named seed
//! definitions and the vocabulary used to generate equipment. The registry
//! is loaded from JSON and provides deterministic seed lookups.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::validation::{check_item, is_present};

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing named seeds and generation vocabulary.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "equipmentTypes": ["Excavator"],
///     "manufacturers": ["JCB"],
///     "seeds": [{"name": "test", "seed": 42, "itemCount": 5}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRegistry {
    version: u32,
    equipment_types: Vec<String>,
    manufacturers: Vec<String>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - A vocabulary entry is blank
    /// - The seeds array is empty or repeats a name
    /// - A fixed item violates the record constraints
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let equipment_types = validate_vocabulary(raw.equipment_types, "equipmentTypes")?;
        let manufacturers = validate_vocabulary(raw.manufacturers, "manufacturers")?;

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut seen = HashSet::with_capacity(raw.seeds.len());
        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| {
                if !seen.insert(s.name.clone()) {
                    return Err(RegistryError::DuplicateSeedName { name: s.name });
                }
                SeedDefinition::from_raw(s)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: raw.version,
            equipment_types,
            manufacturers,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the equipment types available to the generator.
    #[must_use]
    pub fn equipment_types(&self) -> &[String] {
        &self.equipment_types
    }

    /// Returns the manufacturers available to the generator.
    #[must_use]
    pub fn manufacturers(&self) -> &[String] {
        &self.manufacturers
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed definition for deterministic catalogue generation.
///
/// A seed lists fixed items, which are emitted first and in order, followed
/// by `item_count` generated items.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    item_count: usize,
    items: Vec<SeedItem>,
}

impl SeedDefinition {
    fn from_raw(raw: RawSeedDefinition) -> Result<Self, RegistryError> {
        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                check_item(&item.title, &item.manufacturer, item.price_per_hour).map_err(
                    |defect| RegistryError::InvalidItem {
                        seed: raw.name.clone(),
                        index,
                        defect,
                    },
                )?;
                Ok(SeedItem {
                    title: item.title,
                    description: item.description,
                    manufacturer: item.manufacturer,
                    price_per_hour: item.price_per_hour,
                })
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;

        Ok(Self {
            name: raw.name,
            seed: raw.seed,
            item_count: raw.item_count,
            items,
        })
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of items to generate after the fixed items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the fixed items.
    #[must_use]
    pub fn items(&self) -> &[SeedItem] {
        &self.items
    }

    /// Returns the total number of items this seed yields.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.items.len().saturating_add(self.item_count)
    }
}

/// A fixed item listed verbatim in a seed definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedItem {
    title: String,
    description: String,
    manufacturer: String,
    price_per_hour: f64,
}

impl SeedItem {
    /// Returns the item title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the item description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the manufacturer name.
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Returns the hire price per hour.
    #[must_use]
    pub const fn price_per_hour(&self) -> f64 {
        self.price_per_hour
    }
}

fn validate_vocabulary(
    entries: Vec<String>,
    field: &'static str,
) -> Result<Vec<String>, RegistryError> {
    if let Some(index) = entries.iter().position(|entry| !is_present(entry)) {
        return Err(RegistryError::BlankVocabularyEntry { field, index });
    }
    Ok(entries)
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    #[serde(default)]
    equipment_types: Vec<String>,
    #[serde(default)]
    manufacturers: Vec<String>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    #[serde(default)]
    item_count: usize,
    #[serde(default)]
    items: Vec<RawSeedItem>,
}

/// Raw JSON representation of a fixed item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedItem {
    title: String,
    #[serde(default)]
    description: String,
    manufacturer: String,
    price_per_hour: f64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::ItemDefect;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "equipmentTypes": ["Excavator", "Bulldozer"],
        "manufacturers": ["JCB"],
        "seeds": [
            {
                "name": "heavy-yard",
                "seed": 2025,
                "items": [
                    {"title": "Excavator JCB 220", "manufacturer": "JCB", "pricePerHour": 2500}
                ]
            },
            {"name": "busy-depot", "seed": 2026, "itemCount": 25}
        ]
    }"#;

    #[test]
    fn parses_valid_registry() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");

        assert_eq!(registry.version(), 1);
        assert_eq!(registry.equipment_types().len(), 2);
        assert_eq!(registry.manufacturers().len(), 1);
        assert_eq!(registry.seeds().len(), 2);
    }

    #[test]
    fn optional_fields_default() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let heavy = registry.find_seed("heavy-yard").expect("seed found");
        let item = heavy.items().first().expect("one fixed item");

        assert_eq!(heavy.item_count(), 0);
        assert_eq!(heavy.total_items(), 1);
        assert_eq!(item.description(), "");
        assert!((item.price_per_hour() - 2500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn finds_seed_by_name() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let seed = registry.find_seed("busy-depot").expect("seed found");

        assert_eq!(seed.name(), "busy-depot");
        assert_eq!(seed.seed(), 2026);
        assert_eq!(seed.item_count(), 25);
        assert!(seed.items().is_empty());
    }

    #[test]
    fn returns_error_for_unknown_seed() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let result = registry.find_seed("unknown");

        assert_eq!(
            result,
            Err(RegistryError::SeedNotFound {
                name: "unknown".to_owned()
            })
        );
    }

    /// Tests that use pattern matching for parse errors (message content varies).
    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(r#"{"seeds": [{"name": "a", "seed": 1}]}"#)]
    #[case::missing_item_price(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "items": [{"title": "t", "manufacturer": "m"}]}]}"#
    )]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = SeedRegistry::from_json(json);
        assert!(matches!(result, Err(RegistryError::ParseError { .. })));
    }

    /// Tests that check exact error variants.
    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 99, "seeds": [{"name": "a", "seed": 1}]}"#,
        RegistryError::UnsupportedVersion { expected: 1, actual: 99 }
    )]
    #[case::blank_manufacturer(
        r#"{"version": 1, "manufacturers": ["JCB", "  "], "seeds": [{"name": "a", "seed": 1}]}"#,
        RegistryError::BlankVocabularyEntry { field: "manufacturers", index: 1 }
    )]
    #[case::empty_seeds(
        r#"{"version": 1, "seeds": []}"#,
        RegistryError::EmptySeeds
    )]
    #[case::duplicate_seed(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1}, {"name": "a", "seed": 2}]}"#,
        RegistryError::DuplicateSeedName { name: "a".to_owned() }
    )]
    #[case::negative_price(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "items": [
            {"title": "Crane", "manufacturer": "Liebherr", "pricePerHour": 10},
            {"title": "Crane", "manufacturer": "Liebherr", "pricePerHour": -5}
        ]}]}"#,
        RegistryError::InvalidItem { seed: "a".to_owned(), index: 1, defect: ItemDefect::InvalidPrice }
    )]
    #[case::blank_title(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "items": [
            {"title": " ", "manufacturer": "Liebherr", "pricePerHour": 10}
        ]}]}"#,
        RegistryError::InvalidItem { seed: "a".to_owned(), index: 0, defect: ItemDefect::BlankTitle }
    )]
    fn rejects_invalid_registry(#[case] json: &str, #[case] expected: RegistryError) {
        let result = SeedRegistry::from_json(json);
        assert_eq!(result, Err(expected));
    }
}
