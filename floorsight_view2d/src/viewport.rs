// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Configuration for a [`MapViewport`]: scale limits, defaults, and zoom steps.
///
/// The values mirror the dashboard's historical behavior: the plan opens at
/// half size, can be zoomed between 20% and 200%, and the toolbar buttons and
/// wheel use fixed additive steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Smallest allowed scale factor.
    pub min_scale: f64,
    /// Largest allowed scale factor.
    pub max_scale: f64,
    /// Scale applied on construction and [`MapViewport::reset`].
    pub default_scale: f64,
    /// Offset applied on construction and [`MapViewport::reset`].
    pub default_offset: Vec2,
    /// Additive scale step for [`MapViewport::zoom_in`] / [`MapViewport::zoom_out`].
    pub zoom_step: f64,
    /// Additive scale step for [`MapViewport::wheel_zoom`].
    pub wheel_step: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.2,
            max_scale: 2.0,
            default_scale: 0.5,
            default_offset: Vec2::ZERO,
            zoom_step: 0.1,
            wheel_step: 0.05,
        }
    }
}

impl ViewportConfig {
    /// Returns a copy with the scale range normalized.
    ///
    /// The range is reordered so that `min_scale <= max_scale`, both limits
    /// are forced positive, and `default_scale` is clamped into the range.
    #[must_use]
    fn normalized(self) -> Self {
        let (min_scale, max_scale) = if self.min_scale <= self.max_scale {
            (self.min_scale, self.max_scale)
        } else {
            (self.max_scale, self.min_scale)
        };
        let min_scale = min_scale.max(f64::MIN_POSITIVE);
        let max_scale = max_scale.max(min_scale);
        Self {
            min_scale,
            max_scale,
            default_scale: self.default_scale.clamp(min_scale, max_scale),
            ..self
        }
    }
}

/// Pan/zoom viewport over the floor plan.
///
/// `MapViewport` tracks a uniform scale and a pixel offset mapping plan
/// coordinates into a fixed-size view. It can be used to:
/// - Convert points and rectangles between plan and view coordinates.
/// - Pan via an anchor-based drag that follows the pointer 1:1.
/// - Zoom around a chosen anchor point, keeping that plan point fixed.
/// - Center a plan point in the view when a sensor is selected externally.
///
/// The mapping is `view_pt = plan_pt * scale + offset`.
#[derive(Clone, Debug)]
pub struct MapViewport {
    config: ViewportConfig,
    view_size: Size,
    scale: f64,
    offset: Vec2,
    drag_anchor: Option<Vec2>,
}

impl MapViewport {
    /// Creates a viewport of the given view size with the default configuration.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self::with_config(view_size, ViewportConfig::default())
    }

    /// Creates a viewport with an explicit configuration.
    ///
    /// The configuration's scale range is normalized so that
    /// `min_scale <= max_scale` and both limits are positive.
    #[must_use]
    pub fn with_config(view_size: Size, config: ViewportConfig) -> Self {
        let config = config.normalized();
        Self {
            config,
            view_size,
            scale: config.default_scale,
            offset: config.default_offset,
            drag_anchor: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns the current view size in device pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size in device pixels.
    ///
    /// Scale and offset are left untouched; only future center-anchored
    /// operations ([`Self::zoom_in`], [`Self::focus_on`]) see the new size.
    pub fn set_view_size(&mut self, view_size: Size) {
        self.view_size = view_size;
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current offset in view pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the current scale as a rounded percentage, for zoom badges.
    #[must_use]
    pub fn scale_percent(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "scale is clamped to a small positive range"
        )]
        let pct = (self.scale * 100.0 + 0.5) as u32;
        pct
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Converts a plan-space point into view/device coordinates.
    #[must_use]
    pub fn plan_to_view_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Converts a view/device-space point into plan coordinates.
    #[must_use]
    pub fn view_to_plan_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Converts a plan-space rectangle into view/device coordinates.
    ///
    /// The transform is axis-aligned with a uniform positive scale, so
    /// mapping the two corners is exact.
    #[must_use]
    pub fn plan_to_view_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.plan_to_view_point(rect.origin()),
            self.plan_to_view_point(Point::new(rect.max_x(), rect.max_y())),
        )
    }

    /// Converts a view/device-space rectangle into plan coordinates.
    #[must_use]
    pub fn view_to_plan_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.view_to_plan_point(rect.origin()),
            self.view_to_plan_point(Point::new(rect.max_x(), rect.max_y())),
        )
    }

    /// Returns the plan-space rectangle currently visible through the view.
    #[must_use]
    pub fn visible_plan_rect(&self) -> Rect {
        self.view_to_plan_rect(self.view_size.to_rect())
    }

    /// Starts a drag at the given view-space pointer position.
    ///
    /// The anchor records the pointer position relative to the current
    /// offset. Starting a new drag while one is active re-anchors it.
    pub fn begin_drag(&mut self, view_pt: Point) {
        self.drag_anchor = Some(view_pt.to_vec2() - self.offset);
    }

    /// Continues an active drag, moving the plan rigidly with the pointer.
    ///
    /// Has no effect unless a drag is active. The offset follows the pointer
    /// 1:1 with no inertia and no bounds clamping.
    pub fn drag_to(&mut self, view_pt: Point) {
        if let Some(anchor) = self.drag_anchor {
            self.offset = view_pt.to_vec2() - anchor;
        }
    }

    /// Ends the active drag, if any.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Changes the scale by `delta`, keeping `anchor_view` fixed.
    ///
    /// The anchor's plan coordinate is backed out with the *pre-zoom* scale,
    /// the new scale is clamped into the configured range, and the offset is
    /// then recomputed so the anchor's plan point still maps to
    /// `anchor_view`. Reversing that order would break the fixed-point
    /// guarantee.
    ///
    /// An active drag anchor is intentionally left untouched; it remains
    /// expressed relative to the offset at drag-start time.
    pub fn zoom_by(&mut self, delta: f64, anchor_view: Point) {
        let old_scale = self.scale;
        let new_scale = (old_scale + delta).clamp(self.config.min_scale, self.config.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }

        let anchor_plan = (anchor_view.to_vec2() - self.offset) / old_scale;
        self.offset = anchor_view.to_vec2() - anchor_plan * new_scale;
        self.scale = new_scale;
    }

    /// Zooms in by one configured step, anchored at the view center.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.zoom_step, self.view_center());
    }

    /// Zooms out by one configured step, anchored at the view center.
    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.config.zoom_step, self.view_center());
    }

    /// Applies a wheel event at the given pointer position.
    ///
    /// A positive `delta_y` (scrolling down) zooms out by one wheel step; a
    /// negative one zooms in. The plan point under the pointer stays fixed.
    pub fn wheel_zoom(&mut self, delta_y: f64, anchor_view: Point) {
        let step = if delta_y > 0.0 {
            -self.config.wheel_step
        } else {
            self.config.wheel_step
        };
        self.zoom_by(step, anchor_view);
    }

    /// Restores the configured default scale and offset.
    pub fn reset(&mut self) {
        self.scale = self.config.default_scale;
        self.offset = self.config.default_offset;
    }

    /// Centers the given plan-space point in the view at the current scale.
    pub fn focus_on(&mut self, plan_pt: Point) {
        self.offset = self.view_size.to_vec2() * 0.5 - plan_pt.to_vec2() * self.scale;
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewportDebugInfo {
        MapViewportDebugInfo {
            view_size: self.view_size,
            visible_plan_rect: self.visible_plan_rect(),
            scale: self.scale,
            offset: self.offset,
            dragging: self.is_dragging(),
            config: self.config,
        }
    }

    fn view_center(&self) -> Point {
        (self.view_size.to_vec2() * 0.5).to_point()
    }
}

/// Debug snapshot of a [`MapViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewportDebugInfo {
    /// Current view size in device pixels.
    pub view_size: Size,
    /// Plan-space rectangle currently visible through the view.
    pub visible_plan_rect: Rect,
    /// Current uniform scale factor.
    pub scale: f64,
    /// Current offset in view pixels.
    pub offset: Vec2,
    /// Whether a drag is active.
    pub dragging: bool,
    /// Active configuration.
    pub config: ViewportConfig,
}
