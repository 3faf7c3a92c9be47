// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorsight Selection: detail-overlay selection bookkeeping.
//!
//! This crate tracks which sensor, if any, is currently selected and whether
//! the detail overlay is open. It knows nothing about sensors themselves:
//! the key type is generic, and validating that a key refers to a real item
//! is the caller's job (the map component looks ids up first and no-ops on
//! unknown ones).
//!
//! The core type is [`DetailSelection`], which tracks:
//! - An optional **selected** key.
//! - Whether the **overlay** presenting that key's detail is open.
//! - A monotonically increasing **revision** counter that bumps only when
//!   the selection or overlay state actually changes, giving observers a
//!   cheap "did anything happen?" marker.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorsight_selection::DetailSelection;
//!
//! let mut selection = DetailSelection::<u32>::new();
//!
//! // Marker or list click: select and open the overlay.
//! selection.open(7);
//! assert_eq!(selection.selected(), Some(&7));
//! assert!(selection.is_open());
//!
//! // Dismissing the overlay clears the selection.
//! selection.dismiss();
//! assert_eq!(selection.selected(), None);
//! assert!(!selection.is_open());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Selection state for a detail overlay.
///
/// Both a map-marker click and a list-row click funnel into [`Self::open`];
/// [`Self::dismiss`] is wired to the overlay's close affordance. The
/// container never interprets keys — equality is only used to detect no-op
/// transitions.
#[derive(Clone, Debug, Default)]
pub struct DetailSelection<K> {
    selected: Option<K>,
    overlay_open: bool,
    revision: u64,
}

impl<K> DetailSelection<K> {
    /// Creates an empty selection with the overlay closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            overlay_open: false,
            revision: 0,
        }
    }

    /// Returns a reference to the selected key, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// Returns `true` while the detail overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay_open
    }

    /// Returns the current revision counter.
    ///
    /// The revision bumps only when a mutation changes the selected key or
    /// the overlay flag; no-op calls leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Closes the overlay and clears the selection.
    pub fn dismiss(&mut self) {
        if self.selected.is_none() && !self.overlay_open {
            return;
        }
        self.selected = None;
        self.overlay_open = false;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K: PartialEq> DetailSelection<K> {
    /// Selects `key` and opens the detail overlay.
    pub fn open(&mut self, key: K) {
        if self.overlay_open && self.selected.as_ref() == Some(&key) {
            return;
        }
        self.selected = Some(key);
        self.overlay_open = true;
        self.bump_revision();
    }

    /// Selects `key` without touching the overlay flag.
    ///
    /// Used when a selection should be remembered (for example, to highlight
    /// a list row) without presenting the detail overlay.
    pub fn select(&mut self, key: K) {
        if self.selected.as_ref() == Some(&key) {
            return;
        }
        self.selected = Some(key);
        self.bump_revision();
    }

    /// Returns `true` if `key` is the selected key.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.as_ref() == Some(key)
    }
}
