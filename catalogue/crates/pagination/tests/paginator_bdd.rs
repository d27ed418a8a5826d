//! Behavioural tests for the pagination crate.
//!
//! These scenarios walk a paginator through the transitions the catalogue
//! list view relies on.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use pagination::{PageSize, Paginator};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

#[derive(Default, ScenarioState)]
struct World {
    paginator: Slot<Paginator>,
    items: Slot<Vec<usize>>,
}

impl World {
    fn paginator(&self) -> Paginator {
        self.paginator.get().expect("paginator should be set")
    }

    fn items(&self) -> Vec<usize> {
        self.items.get().expect("items should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a paginator showing {size:usize} items per page")]
fn a_paginator_showing_items_per_page(world: &World, size: usize) {
    let page_size = PageSize::new(size).expect("non-zero page size");
    world.paginator.set(Paginator::new(page_size));
}

#[given("a collection of {count:usize} items")]
fn a_collection_of_items(world: &World, count: usize) {
    world.items.set((1..=count).collect());
}

#[when("the user moves to the next page twice")]
fn the_user_moves_to_the_next_page_twice(world: &World) {
    let mut paginator = world.paginator();
    let total = paginator.total_pages(world.items().len());
    paginator.next_page(total).expect("second page exists");
    paginator.next_page(total).expect("third page exists");
    world.paginator.set(paginator);
}

#[then("there are {pages:usize} pages")]
fn there_are_pages(world: &World, pages: usize) {
    assert_eq!(world.paginator().total_pages(world.items().len()), pages);
}

#[then("the window holds {count:usize} items")]
fn the_window_holds_items(world: &World, count: usize) {
    let items = world.items();
    assert_eq!(world.paginator().window(&items).len(), count);
}

#[then("the current page is {page:usize}")]
fn the_current_page_is(world: &World, page: usize) {
    assert_eq!(world.paginator().current_page().get(), page);
}

#[then("the next control is hidden")]
fn the_next_control_is_hidden(world: &World) {
    let paginator = world.paginator();
    let total = paginator.total_pages(world.items().len());
    let controls = paginator.controls(total).expect("controls shown");
    assert!(!controls.next);
    assert!(controls.previous);
}

#[then("the pagination controls are hidden")]
fn the_pagination_controls_are_hidden(world: &World) {
    let paginator = world.paginator();
    let total = paginator.total_pages(world.items().len());
    assert!(paginator.controls(total).is_none());
}

#[scenario(
    path = "tests/features/paginator.feature",
    name = "Seven items span three pages"
)]
fn seven_items_span_three_pages(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/paginator.feature", name = "Moving to the last page")]
fn moving_to_the_last_page(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/paginator.feature",
    name = "A single page hides the controls"
)]
fn a_single_page_hides_the_controls(world: World) {
    let _ = world;
}
