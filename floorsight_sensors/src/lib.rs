// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorsight Sensors: sensor reference data and readings.
//!
//! This crate owns the plain data records behind the dashboard:
//!
//! - [`Sensor`]: immutable reference data — id, plan position, marker size,
//!   and an explicit [`SensorZone`] category (no id-substring sniffing).
//! - [`SensorRegistry`]: an insertion-ordered collection with O(1) id
//!   lookup and a linear, ASCII-case-insensitive id filter.
//! - [`SensorReading`]: ephemeral measured state — optional temperature and
//!   humidity, a [`SensorStatus`], and an update timestamp.
//! - [`ReadingSet`]: exactly one reading per registered sensor, built from
//!   an injected [`ReadingSource`] so behavior stays deterministic and
//!   testable. The `mock` feature adds a seeded [`MockReadings`] source.
//!
//! The crate has no I/O and no clock; timestamps are caller-supplied epoch
//! milliseconds. The only fallible operation is registering a duplicate id.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use floorsight_sensors::{Sensor, SensorRegistry, SensorZone};
//!
//! let mut registry = SensorRegistry::new();
//! registry
//!     .register(Sensor::new("A-1F-01", Point::new(100.0, 200.0), SensorZone::FloorOne))
//!     .unwrap();
//! registry
//!     .register(Sensor::new("B-2F-05", Point::new(300.0, 400.0), SensorZone::FloorTwo))
//!     .unwrap();
//!
//! // O(1) lookup by id; iteration preserves registration order.
//! assert!(registry.get("A-1F-01").is_some());
//! let hits: Vec<_> = registry.filter_by_id("b-2f").map(|s| s.id()).collect();
//! assert_eq!(hits, ["B-2F-05"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod reading;
mod registry;
mod sensor;

#[cfg(feature = "mock")]
mod mock;

pub use reading::{ReadingSet, ReadingSource, SensorReading};
pub use registry::{DuplicateIdError, SensorRegistry};
pub use sensor::{PLAN_SIZE, Sensor, SensorStatus, SensorZone};

#[cfg(feature = "mock")]
pub use mock::MockReadings;
