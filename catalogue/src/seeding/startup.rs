//! Startup seeding orchestration.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use example_data::{
    ExampleEquipmentSeed, GenerationError, RegistryError, SeedRegistry, generate_example_equipment,
};
use thiserror::Error;
use tracing::info;

use crate::domain::{
    CatalogueStore, Equipment, EquipmentDraft, EquipmentId, EquipmentValidationError, PricePerHour,
};
use crate::settings::CatalogueSettings;

/// Errors returned while seeding the catalogue at startup.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or seed lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Item generation failed.
    #[error("example equipment generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A seeded record was rejected by the domain.
    #[error("seed item {index} failed validation: {source}")]
    InvalidItem {
        /// Position of the record in the seed output.
        index: usize,
        /// Domain validation failure.
        #[source]
        source: EquipmentValidationError,
    },
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Build the initial catalogue according to `settings`.
///
/// Returns an empty catalogue when seeding is disabled.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when the seed name is blank, the registry
/// cannot be read or parsed, the seed is unknown, or a seeded record fails
/// validation.
///
/// # Examples
///
/// ```
/// use catalogue::seeding::seed_catalogue_on_startup;
/// use catalogue::settings::CatalogueSettings;
///
/// let settings = CatalogueSettings {
///     seeding_enabled: None,
///     seed_name: None,
///     registry_path: None,
///     json_logs: None,
/// };
/// let store = seed_catalogue_on_startup(&settings).expect("bundled registry seeds");
/// assert_eq!(store.len(), 6);
/// ```
pub fn seed_catalogue_on_startup(
    settings: &CatalogueSettings,
) -> Result<CatalogueStore, StartupSeedingError> {
    if !settings.seeding_enabled() {
        info!(reason = "disabled", "catalogue seeding skipped");
        return Ok(CatalogueStore::new());
    }

    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let registry = load_registry(&settings.registry_path())?;
    seed_catalogue(&registry, seed_name)
}

/// Generate the named seed and convert every record into catalogue items,
/// preserving the seed's order.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when the seed is unknown, generation
/// fails, or a record fails validation.
pub fn seed_catalogue(
    registry: &SeedRegistry,
    seed_name: &str,
) -> Result<CatalogueStore, StartupSeedingError> {
    let seed_def = registry.find_seed(seed_name)?;
    let items = generate_example_equipment(registry, seed_def)?
        .into_iter()
        .enumerate()
        .map(|(index, seed)| {
            equipment_from_seed(seed).map_err(|source| StartupSeedingError::InvalidItem {
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        seed_key = seed_name,
        item_count = items.len(),
        "catalogue seeded"
    );
    Ok(CatalogueStore::from_items(items))
}

/// Convert a generated record into a catalogue item.
///
/// # Errors
///
/// Returns [`EquipmentValidationError`] when the record breaks an item
/// constraint.
pub fn equipment_from_seed(seed: ExampleEquipmentSeed) -> Result<Equipment, EquipmentValidationError> {
    Equipment::new(EquipmentDraft {
        id: EquipmentId::from_uuid(seed.id),
        title: seed.title,
        description: seed.description,
        manufacturer: seed.manufacturer,
        price_per_hour: PricePerHour::new(seed.price_per_hour)?,
    })
}

/// Read and parse the registry at `path` through a capability-scoped
/// directory handle.
///
/// # Errors
///
/// Returns [`StartupSeedingError::RegistryRead`] when the file cannot be
/// read or is not UTF-8, and [`StartupSeedingError::Registry`] when it does
/// not parse.
pub fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let read_error = |source: std::io::Error| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let payload = dir.read(Path::new(file_name)).map_err(read_error)?;
    let contents = String::from_utf8(payload).map_err(|source| {
        read_error(std::io::Error::new(std::io::ErrorKind::InvalidData, source))
    })?;
    Ok(SeedRegistry::from_json(&contents)?)
}
