// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use kurbo::{Point, Rect, Size};
use peniko::Color;
use smallvec::SmallVec;

use floorsight_selection::DetailSelection;
use floorsight_sensors::{ReadingSet, ReadingSource, Sensor, SensorReading, SensorRegistry};
use floorsight_view2d::{MapViewport, MapViewportDebugInfo};

use crate::options::MapOptions;

bitflags::bitflags! {
    /// Toggleable map affordances.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MapFlags: u8 {
        /// Id labels are drawn under each marker.
        const SHOW_LABELS = 0b0000_0001;
        /// Hovering a marker shows its id tooltip.
        const HOVER_TOOLTIPS = 0b0000_0010;
    }
}

impl Default for MapFlags {
    fn default() -> Self {
        Self::HOVER_TOOLTIPS
    }
}

/// Everything a renderer needs to draw one marker.
#[derive(Clone, Copy, Debug)]
pub struct MarkerInfo<'a> {
    /// The sensor behind the marker.
    pub sensor: &'a Sensor,
    /// Marker bounds in view/device pixels, before hover emphasis.
    pub rect: Rect,
    /// Fill color from the zone palette.
    pub fill: Color,
    /// Whether the pointer is over this marker.
    pub hovered: bool,
    /// Whether this marker's sensor is the current selection.
    pub selected: bool,
}

/// Joined sensor + reading data for the detail overlay.
#[derive(Clone, Copy, Debug)]
pub struct SensorDetail<'a> {
    /// Reference data.
    pub sensor: &'a Sensor,
    /// Current reading; present for every sensor whose reading set was
    /// built against the same registry.
    pub reading: Option<&'a SensorReading>,
    /// Status-dot color, when a reading is present.
    pub status_color: Option<Color>,
}

/// The unified floor-plan map component.
///
/// `MapView` owns the sensor registry, the current reading set, the pan/zoom
/// viewport, hover state, and the detail-overlay selection, and interprets
/// pointer and wheel input against them. It is headless: rendering, dialog
/// presentation, and label text are the embedding layer's job, fed by
/// [`Self::visible_markers`], [`Self::selected_detail`], and the debug
/// snapshot.
///
/// All mutation is synchronous inside the event methods; nothing blocks or
/// suspends, and the registry is static for the component's lifetime.
#[derive(Clone, Debug)]
pub struct MapView {
    registry: SensorRegistry,
    readings: ReadingSet,
    viewport: MapViewport,
    selection: DetailSelection<String>,
    options: MapOptions,
    flags: MapFlags,
    hovered: Option<String>,
    armed_click: Option<String>,
}

impl MapView {
    /// Creates a map over `registry` with default options.
    #[must_use]
    pub fn new(registry: SensorRegistry, readings: ReadingSet, view_size: Size) -> Self {
        Self::with_options(registry, readings, view_size, MapOptions::default())
    }

    /// Creates a map with explicit presentation options.
    #[must_use]
    pub fn with_options(
        registry: SensorRegistry,
        readings: ReadingSet,
        view_size: Size,
        options: MapOptions,
    ) -> Self {
        let mut flags = MapFlags::default();
        flags.set(MapFlags::SHOW_LABELS, options.show_labels);
        Self {
            registry,
            readings,
            viewport: MapViewport::new(view_size),
            selection: DetailSelection::new(),
            options,
            flags,
            hovered: None,
            armed_click: None,
        }
    }

    /// Returns the presentation options.
    #[must_use]
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Returns the sensor registry.
    #[must_use]
    pub fn registry(&self) -> &SensorRegistry {
        &self.registry
    }

    /// Returns the current reading set.
    #[must_use]
    pub fn readings(&self) -> &ReadingSet {
        &self.readings
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// Returns the viewport mutably, for embedding layers that need to
    /// resize it or drive it directly.
    pub fn viewport_mut(&mut self) -> &mut MapViewport {
        &mut self.viewport
    }

    /// Returns the detail-overlay selection.
    #[must_use]
    pub fn selection(&self) -> &DetailSelection<String> {
        &self.selection
    }

    /// Returns the id of the hovered sensor, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Returns the active flags.
    #[must_use]
    pub fn flags(&self) -> MapFlags {
        self.flags
    }

    /// Returns `true` while id labels are shown.
    #[must_use]
    pub fn labels_visible(&self) -> bool {
        self.flags.contains(MapFlags::SHOW_LABELS)
    }

    /// Toggles the id labels under each marker.
    pub fn toggle_labels(&mut self) {
        self.flags.toggle(MapFlags::SHOW_LABELS);
    }

    /// Regenerates every reading from `source`.
    pub fn refresh_readings<S: ReadingSource>(&mut self, source: &mut S) {
        self.readings.refresh(&self.registry, source);
    }

    /// Returns a marker's bounds in view pixels.
    ///
    /// The rect is centered on the sensor's transformed plan position, and
    /// each side is floored at `min_marker_px` so markers stay clickable at
    /// low zoom.
    #[must_use]
    pub fn marker_rect(&self, sensor: &Sensor) -> Rect {
        let center = self.viewport.plan_to_view_point(sensor.pos());
        let scale = self.viewport.scale();
        let size = Size::new(
            (sensor.size().width * scale).max(self.options.min_marker_px),
            (sensor.size().height * scale).max(self.options.min_marker_px),
        );
        Rect::from_center_size(center, size)
    }

    /// Returns the topmost marker containing `at`, in view pixels.
    ///
    /// Later-registered sensors draw above earlier ones, and the hovered
    /// marker draws above everything, so it wins outright when hit.
    #[must_use]
    pub fn hit_test(&self, at: Point) -> Option<&Sensor> {
        let mut topmost = None;
        for sensor in &self.registry {
            if self.marker_rect(sensor).contains(at) {
                if self.hovered.as_deref() == Some(sensor.id()) {
                    return Some(sensor);
                }
                topmost = Some(sensor);
            }
        }
        topmost
    }

    /// Returns draw data for every marker intersecting the view.
    #[must_use]
    pub fn visible_markers(&self) -> SmallVec<[MarkerInfo<'_>; 16]> {
        let view_rect = self.viewport.view_size().to_rect();
        let mut markers = SmallVec::new();
        for sensor in &self.registry {
            let rect = self.marker_rect(sensor);
            if rect.intersect(view_rect).is_zero_area() {
                continue;
            }
            markers.push(MarkerInfo {
                sensor,
                rect,
                fill: self.options.zone_palette.color(sensor.zone()),
                hovered: self.hovered.as_deref() == Some(sensor.id()),
                selected: self
                    .selection
                    .selected()
                    .is_some_and(|selected| selected == sensor.id()),
            });
        }
        markers
    }

    /// Handles a pointer press at `at` in view pixels.
    ///
    /// Over a marker, this arms a click for that sensor; anywhere else it
    /// begins a viewport drag.
    pub fn pointer_down(&mut self, at: Point) {
        match self.hit_test(at) {
            Some(sensor) => self.armed_click = Some(sensor.id().to_string()),
            None => self.viewport.begin_drag(at),
        }
    }

    /// Handles pointer movement to `at` in view pixels.
    ///
    /// While a drag is active the plan follows the pointer 1:1; otherwise
    /// the hover state tracks the marker under the pointer.
    pub fn pointer_move(&mut self, at: Point) {
        if self.viewport.is_dragging() {
            self.viewport.drag_to(at);
            return;
        }
        self.hovered = self.hit_test(at).map(|sensor| sensor.id().to_string());
    }

    /// Handles a pointer release at `at` in view pixels.
    ///
    /// A click armed by [`Self::pointer_down`] completes — opening the
    /// detail overlay — only if the release still lands on the same marker.
    /// Any active drag ends.
    pub fn pointer_up(&mut self, at: Point) {
        if let Some(armed) = self.armed_click.take() {
            let still_on_marker = self
                .hit_test(at)
                .is_some_and(|sensor| sensor.id() == armed);
            if still_on_marker {
                self.selection.open(armed);
            }
        }
        self.viewport.end_drag();
    }

    /// Handles the pointer leaving the map, ending any drag and hover.
    pub fn pointer_leave(&mut self) {
        self.viewport.end_drag();
        self.armed_click = None;
        self.hovered = None;
    }

    /// Handles a wheel event at `at`; the plan point under the pointer stays
    /// fixed while the scale changes.
    pub fn wheel(&mut self, delta_y: f64, at: Point) {
        self.viewport.wheel_zoom(delta_y, at);
    }

    /// Toolbar zoom-in, anchored at the view center.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// Toolbar zoom-out, anchored at the view center.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Toolbar reset: default scale and offset.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Selects a sensor by id and opens its detail overlay.
    ///
    /// Unknown ids are a defensive no-op: nothing is selected and the
    /// overlay does not open. Returns whether the id was known.
    pub fn select_sensor(&mut self, id: &str) -> bool {
        if self.registry.get(id).is_none() {
            return false;
        }
        self.selection.open(id.to_string());
        true
    }

    /// Selects a sensor from the list view, recentering the map on it.
    ///
    /// Behaves like [`Self::select_sensor`] plus a
    /// [`MapViewport::focus_on`] at the sensor's plan position. Unknown ids
    /// are a no-op.
    pub fn select_from_list(&mut self, id: &str) -> bool {
        let Some(pos) = self.registry.get(id).map(Sensor::pos) else {
            return false;
        };
        self.viewport.focus_on(pos);
        self.selection.open(id.to_string());
        true
    }

    /// Closes the detail overlay and clears the selection.
    pub fn dismiss_overlay(&mut self) {
        self.selection.dismiss();
    }

    /// Returns the joined detail data for a sensor id, if known.
    #[must_use]
    pub fn detail(&self, id: &str) -> Option<SensorDetail<'_>> {
        let sensor = self.registry.get(id)?;
        let reading = self.readings.get(id);
        Some(SensorDetail {
            sensor,
            reading,
            status_color: reading.map(|r| self.options.status_palette.color(r.status)),
        })
    }

    /// Returns the detail data for the open overlay, if any.
    #[must_use]
    pub fn selected_detail(&self) -> Option<SensorDetail<'_>> {
        if !self.selection.is_open() {
            return None;
        }
        self.selection
            .selected()
            .and_then(|id| self.detail(id))
    }

    /// Snapshot of the current map state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewDebugInfo {
        MapViewDebugInfo {
            sensor_count: self.registry.len(),
            reading_count: self.readings.len(),
            hovered: self.hovered.clone(),
            selected: self.selection.selected().cloned(),
            overlay_open: self.selection.is_open(),
            flags: self.flags,
            viewport: self.viewport.debug_info(),
        }
    }
}

/// Debug snapshot of a [`MapView`] state.
#[derive(Clone, Debug)]
pub struct MapViewDebugInfo {
    /// Number of registered sensors.
    pub sensor_count: usize,
    /// Number of readings held.
    pub reading_count: usize,
    /// Hovered sensor id, if any.
    pub hovered: Option<String>,
    /// Selected sensor id, if any.
    pub selected: Option<String>,
    /// Whether the detail overlay is open.
    pub overlay_open: bool,
    /// Active flags.
    pub flags: MapFlags,
    /// Viewport snapshot.
    pub viewport: MapViewportDebugInfo,
}
