// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorsight Map: the unified floor-plan map component.
//!
//! This crate ties the dashboard's headless pieces together into one map
//! model: sensor markers laid out over the plan through a
//! [`floorsight_view2d::MapViewport`], topmost-wins hit testing, hover
//! tracking, a click-vs-drag pointer protocol, anchored wheel zoom, and the
//! detail-overlay selection. The two historical map variants are a single
//! [`MapView`] parameterized by [`MapOptions`].
//!
//! Rendering stays external. A host draws the floor-plan image under the
//! viewport transform, then consumes [`MapView::visible_markers`] for marker
//! rects and fills, and [`MapView::selected_detail`] for the overlay's data.
//! Pointer, wheel, and toolbar events are forwarded to the corresponding
//! `MapView` methods.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use floorsight_map::MapView;
//! use floorsight_sensors::{ReadingSet, Sensor, SensorRegistry, SensorZone};
//!
//! let mut registry = SensorRegistry::new();
//! registry
//!     .register(Sensor::new("A-1F-01", Point::new(100.0, 200.0), SensorZone::FloorOne))
//!     .unwrap();
//!
//! let mut map = MapView::new(registry, ReadingSet::default(), Size::new(800.0, 600.0));
//!
//! // A click on the marker opens the detail overlay.
//! let at = map.viewport().plan_to_view_point(Point::new(100.0, 200.0));
//! map.pointer_down(at);
//! map.pointer_up(at);
//! assert!(map.selection().is_open());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod options;
mod view;

pub use options::{MapOptions, MarkerStyle, StatusPalette, ZonePalette};
pub use view::{MapFlags, MapView, MapViewDebugInfo, MarkerInfo, SensorDetail};
