// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect, Size};

/// Fixed size of the floor-plan content plane, in plan units.
///
/// The background image is rendered at this size and all sensor positions
/// live inside it.
pub const PLAN_SIZE: Size = Size::new(3000.0, 2000.0);

/// Default marker footprint for sensors registered without an explicit size.
const DEFAULT_MARKER_SIZE: Size = Size::new(30.0, 30.0);

/// Declared category of a sensor, used for marker coloring.
///
/// This replaces the historical practice of inferring a category from id
/// substrings (`"-1F"`, `"-2F"`, ...). The zone is reference data declared at
/// registration time; palettes key off it directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SensorZone {
    /// First-floor sensors.
    #[default]
    FloorOne,
    /// Second-floor sensors.
    FloorTwo,
    /// Sensors outside the numbered floors (loading bays, perimeter, ...).
    Exterior,
}

/// Health classification attached to a [`crate::SensorReading`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SensorStatus {
    /// Operating within expected bounds.
    #[default]
    Normal,
    /// Outside expected bounds but not yet actionable.
    Warning,
    /// Requires attention.
    Critical,
}

/// Immutable reference data for a single sensor.
///
/// Positions and marker sizes are expressed in plan units (see
/// [`PLAN_SIZE`]); the viewport scales them into device pixels. Sensors are
/// loaded once at startup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Sensor {
    id: String,
    pos: Point,
    size: Size,
    zone: SensorZone,
}

impl Sensor {
    /// Creates a sensor with the default marker footprint.
    #[must_use]
    pub fn new(id: impl Into<String>, pos: Point, zone: SensorZone) -> Self {
        Self {
            id: id.into(),
            pos,
            size: DEFAULT_MARKER_SIZE,
            zone,
        }
    }

    /// Sets an explicit marker footprint in plan units.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Returns the unique sensor identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the marker center position in plan units.
    #[must_use]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Returns the marker footprint in plan units.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the declared zone.
    #[must_use]
    pub fn zone(&self) -> SensorZone {
        self.zone
    }

    /// Returns the marker bounds in plan units, centered on [`Self::pos`].
    #[must_use]
    pub fn plan_rect(&self) -> Rect {
        Rect::from_center_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{Sensor, SensorZone};

    #[test]
    fn plan_rect_is_centered_on_the_position() {
        let sensor = Sensor::new("A-1F-01", Point::new(100.0, 200.0), SensorZone::FloorOne)
            .with_size(Size::new(40.0, 20.0));

        let rect = sensor.plan_rect();
        assert_eq!(rect.center(), Point::new(100.0, 200.0));
        assert_eq!(rect.width(), 40.0);
        assert_eq!(rect.height(), 20.0);
    }
}
