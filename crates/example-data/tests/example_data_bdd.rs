//! Behavioural tests for seed registries and equipment generation.
//!
//! Registries are assembled per scenario so each step states the shape of
//! the data it relies on.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use example_data::{
    ExampleEquipmentSeed, ItemDefect, RegistryError, SeedRegistry, generate_example_equipment,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

const MANUFACTURERS: [&str; 4] = ["Caterpillar", "Komatsu", "Volvo", "JCB"];

/// Scenario state: the registry under test and what was derived from it.
#[derive(Default, ScenarioState)]
struct World {
    document: Slot<String>,
    registry: Slot<SeedRegistry>,
    parse_error: Slot<RegistryError>,
    lookup_error: Slot<RegistryError>,
    fixed_titles: Slot<Vec<String>>,
    catalogue: Slot<Vec<ExampleEquipmentSeed>>,
    repeat: Slot<Vec<ExampleEquipmentSeed>>,
}

impl World {
    fn registry(&self) -> SeedRegistry {
        self.registry.get().expect("registry should be built")
    }

    fn catalogue(&self) -> Vec<ExampleEquipmentSeed> {
        self.catalogue.get().expect("catalogue should be generated")
    }

    fn generate(&self, name: &str) -> Vec<ExampleEquipmentSeed> {
        let registry = self.registry();
        let seed_def = registry.find_seed(name).expect("seed should exist");
        generate_example_equipment(&registry, seed_def).expect("generation should succeed")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn fixed_item_json(index: usize) -> String {
    format!(
        r#"{{"title": "Fixed crane {index}", "manufacturer": "Liebherr", "pricePerHour": 4000}}"#
    )
}

fn manufacturers_json() -> String {
    MANUFACTURERS
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[given("a registry where seed \"{name}\" lists {fixed:usize} fixed items and generates {count:usize} more")]
fn a_registry_with_seed(world: &World, name: String, fixed: usize, count: usize) {
    let items: Vec<String> = (0..fixed).map(fixed_item_json).collect();
    let json = format!(
        r#"{{
            "version": 1,
            "equipmentTypes": ["Excavator", "Bulldozer", "Telehandler"],
            "manufacturers": [{manufacturers}],
            "seeds": [{{"name": "{name}", "seed": 31, "itemCount": {count}, "items": [{items}]}}]
        }}"#,
        manufacturers = manufacturers_json(),
        items = items.join(", "),
    );
    let registry = SeedRegistry::from_json(&json).expect("scenario registry should parse");
    world
        .fixed_titles
        .set((0..fixed).map(|index| format!("Fixed crane {index}")).collect());
    world.registry.set(registry);
}

#[given("a registry document declaring version {version:u32}")]
fn a_registry_document_declaring_version(world: &World, version: u32) {
    world.document.set(format!(
        r#"{{"version": {version}, "seeds": [{{"name": "yard", "seed": 1}}]}}"#
    ));
}

#[given("a registry document whose fixed item has a blank manufacturer")]
fn a_registry_document_with_blank_manufacturer(world: &World) {
    world.document.set(
        r#"{"version": 1, "seeds": [{"name": "broken", "seed": 1, "items": [
            {"title": "Crane", "manufacturer": "  ", "pricePerHour": 100}
        ]}]}"#
            .to_owned(),
    );
}

#[given("a registry document naming seed \"{name}\" twice")]
fn a_registry_document_naming_seed_twice(world: &World, name: String) {
    world.document.set(format!(
        r#"{{"version": 1, "seeds": [{{"name": "{name}", "seed": 1}}, {{"name": "{name}", "seed": 2}}]}}"#
    ));
}

#[when("seed \"{name}\" is generated")]
fn seed_is_generated(world: &World, name: String) {
    world.catalogue.set(world.generate(&name));
}

#[when("seed \"{name}\" is generated twice")]
fn seed_is_generated_twice(world: &World, name: String) {
    world.catalogue.set(world.generate(&name));
    world.repeat.set(world.generate(&name));
}

#[when("the document is parsed")]
fn the_document_is_parsed(world: &World) {
    let document = world.document.get().expect("document should be set");
    let error = SeedRegistry::from_json(&document).expect_err("document should be rejected");
    world.parse_error.set(error);
}

#[when("seed \"{name}\" is looked up")]
fn seed_is_looked_up(world: &World, name: String) {
    let registry = world.registry();
    let error = registry
        .find_seed(&name)
        .map(|_| ())
        .expect_err("seed should be missing");
    world.lookup_error.set(error);
}

#[then("{count:usize} items are produced")]
fn items_are_produced(world: &World, count: usize) {
    assert_eq!(world.catalogue().len(), count);
}

#[then("the first {fixed:usize} items are the fixed items in listed order")]
fn the_first_items_are_fixed(world: &World, fixed: usize) {
    let expected = world.fixed_titles.get().expect("fixed titles recorded");
    let leading: Vec<String> = world
        .catalogue()
        .into_iter()
        .take(fixed)
        .map(|item| item.title)
        .collect();
    assert_eq!(leading, expected);
}

#[then("both catalogues are identical")]
fn both_catalogues_are_identical(world: &World) {
    let repeat = world.repeat.get().expect("second catalogue generated");
    assert_eq!(world.catalogue(), repeat);
}

#[then("every price is a multiple of 50 between 800 and 6000")]
fn every_price_is_a_whole_step(world: &World) {
    for item in world.catalogue() {
        let price = item.price_per_hour;
        assert!((800.0..=6000.0).contains(&price), "price out of range: {item:?}");
        assert_eq!(price.rem_euclid(50.0), 0.0, "price off-step: {item:?}");
    }
}

#[then("every manufacturer comes from the registry vocabulary")]
fn every_manufacturer_is_known(world: &World) {
    for item in world.catalogue() {
        assert!(
            MANUFACTURERS.contains(&item.manufacturer.as_str()),
            "unknown manufacturer: {item:?}"
        );
    }
}

#[then("parsing fails because version {version:u32} is unsupported")]
fn parsing_fails_on_version(world: &World, version: u32) {
    let error = world.parse_error.get().expect("parse error recorded");
    assert_eq!(
        error,
        RegistryError::UnsupportedVersion {
            expected: 1,
            actual: version
        }
    );
}

#[then("parsing fails because item {index:usize} of seed \"{seed}\" has a blank manufacturer")]
fn parsing_fails_on_blank_manufacturer(world: &World, index: usize, seed: String) {
    let error = world.parse_error.get().expect("parse error recorded");
    assert_eq!(
        error,
        RegistryError::InvalidItem {
            seed,
            index,
            defect: ItemDefect::BlankManufacturer
        }
    );
}

#[then("parsing fails because seed \"{name}\" is duplicated")]
fn parsing_fails_on_duplicate(world: &World, name: String) {
    let error = world.parse_error.get().expect("parse error recorded");
    assert_eq!(error, RegistryError::DuplicateSeedName { name });
}

#[then("the lookup reports seed \"{name}\" as missing")]
fn the_lookup_reports_missing(world: &World, name: String) {
    let error = world.lookup_error.get().expect("lookup error recorded");
    assert_eq!(error, RegistryError::SeedNotFound { name });
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Fixed items lead the generated ones"
)]
fn fixed_items_lead(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "The same seed always yields the same catalogue"
)]
fn same_seed_same_catalogue(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generated prices are whole steps within the hire range"
)]
fn generated_prices_are_whole_steps(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Unsupported registry versions are refused"
)]
fn unsupported_versions_refused(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Fixed items must name a manufacturer"
)]
fn fixed_items_need_manufacturer(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Seed names are unique"
)]
fn seed_names_are_unique(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Unknown seeds are reported by name"
)]
fn unknown_seeds_reported(world: World) {
    let _ = world;
}
