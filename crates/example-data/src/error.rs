//! Error types for the example-data crate.
//!
//! Registry errors describe a bad document or an unknown seed. Generation
//! errors describe a seed asking for items the vocabulary cannot supply.

use thiserror::Error;

/// Reasons a fixed seed item fails the catalogue's record constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemDefect {
    /// The title is empty once trimmed.
    #[error("title must not be blank")]
    BlankTitle,
    /// The manufacturer is empty once trimmed.
    #[error("manufacturer must not be blank")]
    BlankManufacturer,
    /// The price is negative or not a finite number.
    #[error("price per hour must be a finite number of at least 0")]
    InvalidPrice,
}

/// Errors that can occur when parsing or querying a seed registry.
///
/// Reading the registry file is the caller's concern; these cover what the
/// text says and which seed is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// An equipment type or manufacturer entry is blank.
    #[error("blank {field} entry at index {index}")]
    BlankVocabularyEntry {
        /// Name of the vocabulary list holding the blank entry.
        field: &'static str,
        /// Index of the blank entry in the list.
        index: usize,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed '{name}' is defined more than once")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },

    /// A fixed item in a seed definition violates the record constraints.
    #[error("seed '{seed}' item {index} is invalid: {defect}")]
    InvalidItem {
        /// Name of the seed holding the item.
        seed: String,
        /// Index of the item within the seed's `items` list.
        index: usize,
        /// The violated constraint.
        defect: ItemDefect,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during equipment generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Generated items were requested but the registry names no equipment
    /// types.
    #[error("registry contains no equipment types for generation")]
    NoEquipmentTypes,

    /// Generated items were requested but the registry names no
    /// manufacturers.
    #[error("registry contains no manufacturers for generation")]
    NoManufacturers,
}
