// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorsight View 2D: the pan/zoom viewport over the floor plan.
//!
//! This crate provides a small, headless model of a view onto a fixed-size
//! content plane (the floor-plan image and its sensor markers), expressed in
//! device pixels. It focuses on:
//! - Viewport state (uniform scale + pixel offset) with clamped scale.
//! - Coordinate conversion between plan and view/device (pixel) space.
//! - Direct-manipulation pan (anchor-based drag) and anchored zoom that keeps
//!   the plan point under the cursor fixed while the scale changes.
//! - Centering a plan point in the view when a sensor is selected externally.
//!
//! It does **not** own any sensor data or rendering backend. Callers are
//! expected to:
//! - Maintain their own marker collection and hit testing (see
//!   `floorsight_map`).
//! - Wire pointer and wheel events into [`MapViewport`] operations at a
//!   higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use floorsight_view2d::MapViewport;
//!
//! // An 800x600 view onto the plan, starting at the default 50% scale.
//! let mut view = MapViewport::new(Size::new(800.0, 600.0));
//!
//! // Zoom in around the cursor; the plan point under it stays put.
//! let cursor = Point::new(320.0, 200.0);
//! let before = view.view_to_plan_point(cursor);
//! view.zoom_by(0.1, cursor);
//! let after = view.view_to_plan_point(cursor);
//! assert!((before.x - after.x).abs() < 1e-9);
//!
//! // Drag follows the pointer 1:1.
//! view.begin_drag(Point::new(100.0, 100.0));
//! view.drag_to(Point::new(130.0, 90.0));
//! view.end_drag();
//! ```
//!
//! ## Design notes
//!
//! - The view is axis-aligned with a **uniform** scale; rotation is out of
//!   scope.
//! - Zoom silently clamps into the configured range rather than erroring.
//! - The drag anchor is expressed relative to the offset at drag start and is
//!   deliberately not recomputed by a zoom occurring mid-drag.
//! - Viewport state is not persisted; every [`MapViewport`] starts from its
//!   [`ViewportConfig`] defaults.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{MapViewport, MapViewportDebugInfo, ViewportConfig};
