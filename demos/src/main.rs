// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted, headless dashboard session.
//!
//! This walks the same path a user would take through the dashboard —
//! filter the sensor list, select a sensor, pan and zoom the map, open and
//! dismiss the detail overlay, switch the UI locale — and prints the state
//! the rendering layer would present at each step.

use kurbo::{Point, Size};

use floorsight_locale::{Catalog, CatalogBuilder, Locale};
use floorsight_map::{MapOptions, MapView, MarkerStyle, ZonePalette};
use floorsight_sensors::{
    MockReadings, ReadingSet, Sensor, SensorRegistry, SensorStatus, SensorZone,
};

fn catalog() -> Catalog {
    CatalogBuilder::new()
        .set(Locale::Vi, "dashboard.title", "Hệ Thống Giám Sát Cảm Biến")
        .set(Locale::En, "dashboard.title", "Sensor Monitoring System")
        .set(Locale::Zh, "dashboard.title", "传感器监控系统")
        .set(Locale::Vi, "sensor.map", "Bản Đồ Cảm Biến")
        .set(Locale::En, "sensor.map", "Sensor Map")
        .set(Locale::Zh, "sensor.map", "传感器地图")
        .set(Locale::Vi, "sensor.detail", "Thông số cảm biến")
        .set(Locale::En, "sensor.detail", "Sensor detail")
        .set(Locale::Vi, "status.normal", "Bình thường")
        .set(Locale::En, "status.normal", "Normal")
        .set(Locale::Vi, "status.warning", "Cảnh báo")
        .set(Locale::En, "status.warning", "Warning")
        .set(Locale::Vi, "status.critical", "Nguy hiểm")
        .set(Locale::En, "status.critical", "Critical")
        .set(Locale::Vi, "list.empty", "Không tìm thấy cảm biến nào")
        .set(Locale::En, "list.empty", "No sensors found")
        .build()
}

fn registry() -> SensorRegistry {
    let mut registry = SensorRegistry::new();
    for (id, x, y, zone) in [
        ("A-1F-01", 100.0, 200.0, SensorZone::FloorOne),
        ("A-1F-02", 450.0, 180.0, SensorZone::FloorOne),
        ("A-1F-03", 820.0, 640.0, SensorZone::FloorOne),
        ("B-2F-05", 300.0, 400.0, SensorZone::FloorTwo),
        ("B-2F-06", 1200.0, 760.0, SensorZone::FloorTwo),
        ("EXT-01", 2900.0, 1950.0, SensorZone::Exterior),
    ] {
        registry
            .register(Sensor::new(id, Point::new(x, y), zone))
            .expect("demo ids are unique");
    }
    registry
}

fn status_key(status: SensorStatus) -> &'static str {
    match status {
        SensorStatus::Normal => "status.normal",
        SensorStatus::Warning => "status.warning",
        SensorStatus::Critical => "status.critical",
    }
}

fn label<'a>(catalog: &'a Catalog, locale: Locale, key: &'a str) -> &'a str {
    catalog.get(locale, key).unwrap_or(key)
}

fn print_overlay(map: &MapView, catalog: &Catalog, locale: Locale) {
    let Some(detail) = map.selected_detail() else {
        println!("  (overlay closed)");
        return;
    };
    println!(
        "  {} {}",
        label(catalog, locale, "sensor.detail"),
        detail.sensor.id()
    );
    if let Some(reading) = detail.reading {
        match reading.temperature {
            Some(t) => println!("    temperature: {t} °C"),
            None => println!("    temperature: —"),
        }
        match reading.humidity {
            Some(h) => println!("    humidity: {h} %"),
            None => println!("    humidity: —"),
        }
        println!(
            "    status: {}",
            label(catalog, locale, status_key(reading.status))
        );
    }
}

fn main() {
    let catalog = catalog();
    let mut locale = Locale::from_tag_or_default("vn");

    let registry = registry();
    let readings = ReadingSet::from_source(&registry, &mut MockReadings::new(2024).at(1_700_000));
    let mut map = MapView::with_options(
        registry,
        readings,
        Size::new(800.0, 600.0),
        MapOptions {
            marker_style: MarkerStyle::Animated,
            zone_palette: ZonePalette::VIVID,
            ..MapOptions::default()
        },
    );

    println!("== {} ==", label(&catalog, locale, "dashboard.title"));
    println!(
        "{} — {} sensors at {}%",
        label(&catalog, locale, "sensor.map"),
        map.registry().len(),
        map.viewport().scale_percent()
    );

    // Filter the list the way the search box does.
    let query = "1f";
    let hits: Vec<&str> = map.registry().filter_by_id(query).map(Sensor::id).collect();
    if hits.is_empty() {
        println!("{}", label(&catalog, locale, "list.empty"));
    } else {
        println!("filter {query:?} -> {hits:?}");
    }

    // Select from the list: recenters the map and opens the overlay.
    map.select_from_list("A-1F-02");
    print_overlay(&map, &catalog, locale);
    map.dismiss_overlay();

    // Drag the plan, then wheel-zoom in around the pointer.
    map.pointer_down(Point::new(600.0, 500.0));
    map.pointer_move(Point::new(520.0, 460.0));
    map.pointer_up(Point::new(520.0, 460.0));
    map.wheel(-1.0, Point::new(400.0, 300.0));
    map.wheel(-1.0, Point::new(400.0, 300.0));
    println!(
        "after pan+zoom: {}% with {} markers on screen",
        map.viewport().scale_percent(),
        map.visible_markers().len()
    );

    // Click whatever is under the view center, if anything.
    map.pointer_move(Point::new(400.0, 300.0));
    map.pointer_down(Point::new(400.0, 300.0));
    map.pointer_up(Point::new(400.0, 300.0));

    // Switch the UI locale and re-print the overlay text.
    locale = Locale::from_tag_or_default("en");
    println!("-- locale {} --", locale.tag());
    map.select_sensor("B-2F-05");
    print_overlay(&map, &catalog, locale);

    map.reset_view();
    println!("reset to {}%", map.viewport().scale_percent());
}
