// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `floorsight_selection` crate.
//!
//! These exercise the `DetailSelection<K>` API, with a focus on how the
//! selected key, the overlay flag, and the revision counter interact.

use floorsight_selection::DetailSelection;

#[test]
fn empty_selection_basics() {
    let sel = DetailSelection::<u32>::new();
    assert_eq!(sel.selected(), None);
    assert!(!sel.is_open());
    assert_eq!(sel.revision(), 0);
}

#[test]
fn open_selects_and_opens_the_overlay() {
    let mut sel = DetailSelection::new();
    sel.open(7);

    assert_eq!(sel.selected(), Some(&7));
    assert!(sel.is_open());
    assert_eq!(sel.revision(), 1);

    // No-op: opening the same key with the overlay up does not bump.
    sel.open(7);
    assert_eq!(sel.revision(), 1);

    // Opening a different key is a real change.
    sel.open(9);
    assert_eq!(sel.selected(), Some(&9));
    assert_eq!(sel.revision(), 2);
}

#[test]
fn dismiss_clears_selection_and_bumps_only_on_change() {
    let mut sel = DetailSelection::<u32>::new();
    sel.dismiss();
    assert_eq!(sel.revision(), 0);

    sel.open(3);
    sel.dismiss();
    assert_eq!(sel.selected(), None);
    assert!(!sel.is_open());
    assert_eq!(sel.revision(), 2);

    sel.dismiss();
    assert_eq!(sel.revision(), 2);
}

#[test]
fn select_without_opening() {
    let mut sel = DetailSelection::new();
    sel.select("A-1F-01");

    assert_eq!(sel.selected(), Some(&"A-1F-01"));
    assert!(!sel.is_open());
    assert!(sel.is_selected(&"A-1F-01"));
    assert!(!sel.is_selected(&"B-2F-05"));

    // Re-selecting the same key is a no-op.
    let revision = sel.revision();
    sel.select("A-1F-01");
    assert_eq!(sel.revision(), revision);

    // Opening afterwards only flips the overlay flag.
    sel.open("A-1F-01");
    assert!(sel.is_open());
    assert_eq!(sel.revision(), revision + 1);
}

#[test]
fn open_after_select_of_another_key_replaces_it() {
    let mut sel = DetailSelection::new();
    sel.select(1);
    sel.open(2);

    assert_eq!(sel.selected(), Some(&2));
    assert!(sel.is_open());
}
