//! Deterministic example equipment data for demonstration purposes.
//!
//! This crate provides tools for producing believable, reproducible
//! equipment catalogues from a JSON seed registry. It is designed to be
//! independent of catalogue domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON files
//! - Fixed seed items listed verbatim in the registry
//! - Deterministic item generation using named seeds
//! - Record validation matching catalogue constraints
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_equipment};
//!
//! let json = r#"{
//!     "version": 1,
//!     "equipmentTypes": ["Excavator", "Crane"],
//!     "manufacturers": ["JCB", "Liebherr"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "itemCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let items = generate_example_equipment(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(items.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, ItemDefect, RegistryError};
pub use generator::generate_example_equipment;
pub use registry::{SeedDefinition, SeedItem, SeedRegistry};
pub use seed::ExampleEquipmentSeed;
pub use validation::{is_present, is_valid_price};
