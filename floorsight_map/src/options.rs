// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map presentation options: marker style and color palettes.
//!
//! The dashboard historically shipped two slightly diverged map components
//! with different marker treatments and color schemes. They are unified here:
//! one [`crate::MapView`], parameterized by [`MapOptions`].

use peniko::Color;

use floorsight_sensors::{SensorStatus, SensorZone};

/// How markers respond to hover, for the rendering layer.
///
/// Both styles share geometry and hit testing; the difference is purely
/// presentational (the animated style adds a pulse and a larger hover scale),
/// so it is exposed as data for the renderer rather than behavior here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// Static markers with a modest hover emphasis.
    #[default]
    Plain,
    /// Pulsing markers with a stronger hover emphasis.
    Animated,
}

impl MarkerStyle {
    /// Returns the scale factor a renderer should apply to hovered markers.
    #[must_use]
    pub fn hover_scale(self) -> f64 {
        match self {
            Self::Plain => 1.25,
            Self::Animated => 1.5,
        }
    }
}

/// Marker fill colors keyed by [`SensorZone`].
///
/// An explicit lookup table; no zone is ever inferred from id text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZonePalette {
    /// Fill for [`SensorZone::FloorOne`].
    pub floor_one: Color,
    /// Fill for [`SensorZone::FloorTwo`].
    pub floor_two: Color,
    /// Fill for [`SensorZone::Exterior`].
    pub exterior: Color,
}

impl ZonePalette {
    /// The original map's scheme: green first floor, red second, blue exterior.
    pub const CLASSIC: Self = Self {
        floor_one: Color::from_rgb8(0x22, 0xc5, 0x5e),
        floor_two: Color::from_rgb8(0xef, 0x44, 0x44),
        exterior: Color::from_rgb8(0x3b, 0x82, 0xf6),
    };

    /// The second map variant's scheme: green first floor, blue second, red exterior.
    pub const VIVID: Self = Self {
        floor_one: Color::from_rgb8(0x22, 0xc5, 0x5e),
        floor_two: Color::from_rgb8(0x3b, 0x82, 0xf6),
        exterior: Color::from_rgb8(0xef, 0x44, 0x44),
    };

    /// Returns the fill color for a zone.
    #[must_use]
    pub fn color(&self, zone: SensorZone) -> Color {
        match zone {
            SensorZone::FloorOne => self.floor_one,
            SensorZone::FloorTwo => self.floor_two,
            SensorZone::Exterior => self.exterior,
        }
    }
}

impl Default for ZonePalette {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Status-dot colors keyed by [`SensorStatus`], for the detail overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusPalette {
    /// Dot color for [`SensorStatus::Normal`].
    pub normal: Color,
    /// Dot color for [`SensorStatus::Warning`].
    pub warning: Color,
    /// Dot color for [`SensorStatus::Critical`].
    pub critical: Color,
}

impl StatusPalette {
    /// Green / yellow / red, as in both original variants.
    pub const DEFAULT: Self = Self {
        normal: Color::from_rgb8(0x22, 0xc5, 0x5e),
        warning: Color::from_rgb8(0xea, 0xb3, 0x08),
        critical: Color::from_rgb8(0xef, 0x44, 0x44),
    };

    /// Returns the dot color for a status.
    #[must_use]
    pub fn color(&self, status: SensorStatus) -> Color {
        match status {
            SensorStatus::Normal => self.normal,
            SensorStatus::Warning => self.warning,
            SensorStatus::Critical => self.critical,
        }
    }
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Presentation parameters for a [`crate::MapView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapOptions {
    /// Marker hover treatment.
    pub marker_style: MarkerStyle,
    /// Marker fill colors by zone.
    pub zone_palette: ZonePalette,
    /// Status-dot colors for the detail overlay.
    pub status_palette: StatusPalette,
    /// Minimum on-screen marker side, in device pixels.
    ///
    /// Markers never shrink below this regardless of how far out the view is
    /// zoomed, so they stay clickable.
    pub min_marker_px: f64,
    /// Whether id labels start out visible.
    pub show_labels: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            marker_style: MarkerStyle::Plain,
            zone_palette: ZonePalette::default(),
            status_palette: StatusPalette::default(),
            min_marker_px: 15.0,
            show_labels: false,
        }
    }
}
