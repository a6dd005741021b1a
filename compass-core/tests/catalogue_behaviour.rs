//! Behavioural tests for `MemoryCatalogue` using rstest-bdd.

use std::cell::RefCell;

use compass_core::{MemoryCatalogue, PoiCatalogue, PointOfInterest};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct CatalogueWorld {
    catalogue: RefCell<MemoryCatalogue>,
    resolved: RefCell<Vec<PointOfInterest>>,
}

#[fixture]
fn world() -> CatalogueWorld {
    CatalogueWorld::default()
}

#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn parse_ids(raw: &str) -> Vec<u64> {
    raw.trim_matches('"')
        .split_whitespace()
        .map(|id| id.parse().expect("feature ids should be numeric"))
        .collect()
}

#[given("a catalogue of the Sultanahmet sights")]
fn given_sights(world: &CatalogueWorld) {
    let sights = [
        (1, "Hagia Sophia", 28.9802, 41.0086),
        (2, "Blue Mosque", 28.9768, 41.0054),
        (3, "Topkapi Palace", 28.9833, 41.0115),
        (4, "Grand Bazaar", 28.9682, 41.0108),
        (5, "Basilica Cistern", 28.9779, 41.0084),
        (7, "Spice Bazaar", 28.9704, 41.0165),
    ];
    world.catalogue.replace(MemoryCatalogue::with_pois(
        sights
            .into_iter()
            .map(|(id, name, x, y)| PointOfInterest::new(id, name, Coord { x, y })),
    ));
}

#[given("a catalogue holding two records for place 1")]
fn given_duplicates(world: &CatalogueWorld) {
    let location = Coord { x: 28.9802, y: 41.0086 };
    world.catalogue.replace(MemoryCatalogue::with_pois([
        PointOfInterest::new(1, "Hagia Sophia", location),
        PointOfInterest::new(1, "Hagia Sophia Museum", location),
    ]));
}

#[when("places {ids} are resolved")]
fn when_resolved(world: &CatalogueWorld, ids: String) {
    let found = world.catalogue.borrow().pois_by_id(&parse_ids(&ids));
    world.resolved.replace(found);
}

#[then("the resolved places are {ids}")]
fn then_resolved_ids(world: &CatalogueWorld, ids: String) {
    let actual: Vec<u64> = world.resolved.borrow().iter().map(|poi| poi.id).collect();
    assert_eq!(actual, parse_ids(&ids));
}

#[then("the resolved place is named {name}")]
fn then_resolved_name(world: &CatalogueWorld, name: String) {
    let resolved = world.resolved.borrow();
    let names: Vec<&str> = resolved.iter().map(|poi| poi.name.as_str()).collect();
    assert_eq!(names, vec![name.trim_matches('"')]);
}

#[scenario(path = "tests/features/catalogue.feature", index = 0)]
fn selection_order(world: CatalogueWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalogue.feature", index = 1)]
fn unknown_ids(world: CatalogueWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalogue.feature", index = 2)]
fn duplicate_records(world: CatalogueWorld) {
    let _ = world;
}
