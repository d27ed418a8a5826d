//! Catalogue configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, a configuration file, `CATALOGUE_*`
//! environment variables and command-line flags.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Seed used when none is configured.
pub const DEFAULT_SEED_NAME: &str = "heavy-yard";

/// Registry bundled with the crate.
#[must_use]
pub fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("equipment.json")
}

/// Configuration for one catalogue session.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOGUE")]
pub struct CatalogueSettings {
    /// Fill the catalogue from the seed registry on startup. Unset means
    /// enabled.
    pub seeding_enabled: Option<bool>,
    /// Seed name to load from the registry.
    pub seed_name: Option<String>,
    /// Optional registry path override.
    pub registry_path: Option<PathBuf>,
    /// Emit logs as JSON lines instead of text. Unset means text.
    pub json_logs: Option<bool>,
}

impl CatalogueSettings {
    /// Whether startup seeding runs; on unless configured off.
    #[must_use]
    pub fn seeding_enabled(&self) -> bool {
        self.seeding_enabled.unwrap_or(true)
    }

    /// Whether logs are written as JSON lines.
    #[must_use]
    pub fn json_logs(&self) -> bool {
        self.json_logs.unwrap_or(false)
    }

    /// Return the configured seed name, falling back to the default.
    #[must_use]
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Return the configured registry path, falling back to the default.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}
