// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end exercises of a dashboard session: list filtering, marker and
//! list selection, panning, anchored zooming, and reading refresh, all
//! against one `MapView`.

use kurbo::{Point, Size};

use floorsight_map::{MapOptions, MapView, MarkerStyle, ZonePalette};
use floorsight_sensors::{
    MockReadings, ReadingSet, Sensor, SensorRegistry, SensorZone,
};

fn registry() -> SensorRegistry {
    let mut registry = SensorRegistry::new();
    for (id, x, y, zone) in [
        ("A-1F-01", 100.0, 200.0, SensorZone::FloorOne),
        ("A-1F-02", 450.0, 180.0, SensorZone::FloorOne),
        ("B-2F-05", 300.0, 400.0, SensorZone::FloorTwo),
        ("EXT-01", 2900.0, 1950.0, SensorZone::Exterior),
    ] {
        registry
            .register(Sensor::new(id, Point::new(x, y), zone))
            .unwrap();
    }
    registry
}

fn map() -> MapView {
    let registry = registry();
    let readings = ReadingSet::from_source(&registry, &mut MockReadings::new(99).at(5_000));
    MapView::with_options(
        registry,
        readings,
        Size::new(800.0, 600.0),
        MapOptions {
            marker_style: MarkerStyle::Animated,
            zone_palette: ZonePalette::VIVID,
            ..MapOptions::default()
        },
    )
}

#[test]
fn filter_then_select_from_list_recenters_and_opens_the_overlay() {
    let mut map = map();

    // The user types into the search box...
    let hits: Vec<&str> = map
        .registry()
        .filter_by_id("a-1f")
        .map(Sensor::id)
        .collect();
    assert_eq!(hits, ["A-1F-01", "A-1F-02"]);

    // ...and clicks "view" on the second row.
    assert!(map.select_from_list("A-1F-02"));
    assert!(map.selection().is_open());

    let centered = map.viewport().plan_to_view_point(Point::new(450.0, 180.0));
    assert!((centered.x - 400.0).abs() < 1e-9);
    assert!((centered.y - 300.0).abs() < 1e-9);

    let detail = map.selected_detail().unwrap();
    assert_eq!(detail.sensor.id(), "A-1F-02");
    assert!(detail.reading.is_some());
}

#[test]
fn drag_then_zoom_then_click_still_resolves_the_right_marker() {
    let mut map = map();

    // Pan the plan 120 px right and 40 px down.
    map.pointer_down(Point::new(600.0, 500.0));
    map.pointer_move(Point::new(720.0, 540.0));
    map.pointer_up(Point::new(720.0, 540.0));

    // Wheel-zoom in twice around the point over B-2F-05.
    let over = map.viewport().plan_to_view_point(Point::new(300.0, 400.0));
    map.wheel(-1.0, over);
    map.wheel(-1.0, over);

    // The anchored zoom kept that plan point under the cursor.
    let after = map.viewport().plan_to_view_point(Point::new(300.0, 400.0));
    assert!((after.x - over.x).abs() < 1e-9);
    assert!((after.y - over.y).abs() < 1e-9);

    map.pointer_down(over);
    map.pointer_up(over);
    assert_eq!(
        map.selection().selected().map(String::as_str),
        Some("B-2F-05")
    );
}

#[test]
fn refreshing_readings_keeps_one_per_sensor() {
    let mut map = map();
    assert_eq!(map.readings().len(), map.registry().len());

    map.refresh_readings(&mut MockReadings::new(7).at(6_000));
    assert_eq!(map.readings().len(), map.registry().len());
    let detail = map.detail("EXT-01").unwrap();
    assert_eq!(detail.reading.unwrap().updated_at_ms, 6_000);
}

#[test]
fn overlay_state_survives_view_operations() {
    let mut map = map();
    assert!(map.select_sensor("A-1F-01"));

    map.zoom_in();
    map.reset_view();
    map.toggle_labels();

    assert!(map.selection().is_open());
    assert_eq!(
        map.selection().selected().map(String::as_str),
        Some("A-1F-01")
    );

    map.dismiss_overlay();
    assert!(map.selected_detail().is_none());
    assert_eq!(map.selection().selected(), None);
}

#[test]
fn debug_info_reflects_the_session() {
    let mut map = map();
    map.select_sensor("B-2F-05");

    let info = map.debug_info();
    assert_eq!(info.sensor_count, 4);
    assert_eq!(info.reading_count, 4);
    assert!(info.overlay_open);
    assert_eq!(info.selected.as_deref(), Some("B-2F-05"));
    assert_eq!(info.viewport.scale, 0.5);
}
