//! Deterministic equipment generation from seed definitions.
//!
//! This module provides the core generation function that produces
//! reproducible catalogue data from a seed registry. The same seed value
//! always produces identical output.

use fake::Fake;
use fake::faker::lorem::raw::Sentence;
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedItem, SeedRegistry};
use crate::seed::ExampleEquipmentSeed;

/// Generated prices are whole multiples of this step.
const PRICE_STEP: u32 = 50;

/// Lowest generated price, in steps (800 per hour).
const MIN_PRICE_STEPS: u32 = 16;

/// Highest generated price, in steps (6000 per hour).
const MAX_PRICE_STEPS: u32 = 120;

/// Model numbers range over three digits.
const MODEL_NUMBER_RANGE: std::ops::RangeInclusive<u16> = 100..=999;

/// Generates example equipment from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG, ensuring
/// identical output for the same seed definition. The output holds:
///
/// - The seed's fixed items first, in the order they are listed
/// - Then `item_count` generated items titled "{type} {manufacturer}
///   {model}", priced in whole multiples of 50 between 800 and 6000
/// - Unique UUIDs for every item (deterministically generated)
///
/// # Errors
///
/// Returns [`GenerationError`] if generated items are requested but the
/// registry has no equipment types or no manufacturers.
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_equipment};
///
/// let json = r#"{
///     "version": 1,
///     "equipmentTypes": ["Excavator"],
///     "manufacturers": ["Komatsu"],
///     "seeds": [{"name": "test", "seed": 42, "itemCount": 3}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let items = generate_example_equipment(&registry, seed_def).expect("generated");
///
/// assert_eq!(items.len(), 3);
/// // Same seed produces identical items
/// let again = generate_example_equipment(&registry, seed_def).expect("generated");
/// assert_eq!(items, again);
/// ```
pub fn generate_example_equipment(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleEquipmentSeed>, GenerationError> {
    if seed_def.item_count() > 0 {
        if registry.equipment_types().is_empty() {
            return Err(GenerationError::NoEquipmentTypes);
        }
        if registry.manufacturers().is_empty() {
            return Err(GenerationError::NoManufacturers);
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut items = Vec::with_capacity(seed_def.total_items());

    for fixed in seed_def.items() {
        items.push(fixed_item(&mut rng, fixed));
    }

    for _ in 0..seed_def.item_count() {
        let item = generate_single_item(&mut rng, registry)?;
        items.push(item);
    }

    Ok(items)
}

/// Copies a fixed item, assigning it an id drawn from the RNG.
fn fixed_item(rng: &mut ChaCha8Rng, fixed: &SeedItem) -> ExampleEquipmentSeed {
    ExampleEquipmentSeed {
        id: Uuid::from_u128(rng.random()),
        title: fixed.title().to_owned(),
        description: fixed.description().to_owned(),
        manufacturer: fixed.manufacturer().to_owned(),
        price_per_hour: fixed.price_per_hour(),
    }
}

/// Generates a single item with the provided RNG.
fn generate_single_item(
    rng: &mut ChaCha8Rng,
    registry: &SeedRegistry,
) -> Result<ExampleEquipmentSeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());

    let kind = registry
        .equipment_types()
        .choose(rng)
        .ok_or(GenerationError::NoEquipmentTypes)?;
    let manufacturer = registry
        .manufacturers()
        .choose(rng)
        .ok_or(GenerationError::NoManufacturers)?;

    let model = generate_model_code(rng);
    let description: String = Sentence(EN, 4..9).fake_with_rng(rng);
    let price_steps = rng.random_range(MIN_PRICE_STEPS..=MAX_PRICE_STEPS);

    Ok(ExampleEquipmentSeed {
        id,
        title: format!("{kind} {manufacturer} {model}"),
        description,
        manufacturer: manufacturer.clone(),
        price_per_hour: f64::from(price_steps.saturating_mul(PRICE_STEP)),
    })
}

/// Generates a model code such as `PC-210`.
fn generate_model_code(rng: &mut ChaCha8Rng) -> String {
    let first = char::from(rng.random_range(b'A'..=b'Z'));
    let second = char::from(rng.random_range(b'A'..=b'Z'));
    let number = rng.random_range(MODEL_NUMBER_RANGE);
    format!("{first}{second}-{number}")
}
