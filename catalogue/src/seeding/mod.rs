//! Startup wiring for filling the catalogue from the seed registry.

mod startup;

pub use startup::{
    StartupSeedingError, equipment_from_seed, load_registry, seed_catalogue,
    seed_catalogue_on_startup,
};
