// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::sensor::Sensor;

/// Error returned when registering a sensor whose id is already taken.
#[derive(Clone, PartialEq, Eq)]
pub struct DuplicateIdError {
    /// The offending sensor id.
    pub id: String,
}

impl fmt::Debug for DuplicateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DuplicateIdError {{ id: {:?} }}", self.id)
    }
}

impl fmt::Display for DuplicateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sensor with id {:?} is already registered", self.id)
    }
}

impl core::error::Error for DuplicateIdError {}

/// Insertion-ordered sensor collection with O(1) id lookup.
///
/// The registry preserves registration order for iteration and filtering —
/// the list view shows sensors in source order — while a hash index serves
/// point lookups from marker clicks and list selection.
#[derive(Clone, Debug, Default)]
pub struct SensorRegistry {
    sensors: Vec<Sensor>,
    index: HashMap<String, usize>,
}

impl SensorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered sensors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Returns `true` if no sensors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Registers a sensor, rejecting duplicate ids.
    ///
    /// The existing entry is left untouched when the id is already taken.
    pub fn register(&mut self, sensor: Sensor) -> Result<(), DuplicateIdError> {
        if self.index.contains_key(sensor.id()) {
            return Err(DuplicateIdError {
                id: String::from(sensor.id()),
            });
        }
        self.index.insert(String::from(sensor.id()), self.sensors.len());
        self.sensors.push(sensor);
        Ok(())
    }

    /// Looks up a sensor by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Sensor> {
        self.index.get(id).map(|&idx| &self.sensors[idx])
    }

    /// Returns an iterator over all sensors in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, Sensor> {
        self.sensors.iter()
    }

    /// Returns the sensors whose id contains `query`, case-insensitively.
    ///
    /// The result is the ordered subsequence of the full collection: an empty
    /// query yields every sensor in registration order, and a query matching
    /// nothing yields an empty iterator. A linear scan is sufficient at this
    /// data scale; there is no index and no ranking.
    pub fn filter_by_id<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Sensor> {
        self.sensors
            .iter()
            .filter(move |sensor| contains_ignore_ascii_case(sensor.id(), query))
    }
}

impl<'a> IntoIterator for &'a SensorRegistry {
    type Item = &'a Sensor;
    type IntoIter = core::slice::Iter<'a, Sensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns `true` if `haystack` contains `needle`, ignoring ASCII case.
///
/// Sensor ids are ASCII, so byte-wise comparison is exact. An empty needle
/// matches everything.
fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
