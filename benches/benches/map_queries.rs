// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

use floorsight_map::MapView;
use floorsight_sensors::{
    MockReadings, PLAN_SIZE, ReadingSet, Sensor, SensorRegistry, SensorZone,
};

fn gen_registry(count: usize) -> SensorRegistry {
    let mut rng = Rng::new(0xC1A5_7E55_0000_1111);
    let mut registry = SensorRegistry::new();
    for i in 0..count {
        let zone = match i % 3 {
            0 => SensorZone::FloorOne,
            1 => SensorZone::FloorTwo,
            _ => SensorZone::Exterior,
        };
        let floor = if i % 3 == 1 { "2F" } else { "1F" };
        let pos = Point::new(
            rng.next_f64() * PLAN_SIZE.width,
            rng.next_f64() * PLAN_SIZE.height,
        );
        registry
            .register(Sensor::new(format!("S-{floor}-{i:04}"), pos, zone))
            .unwrap();
    }
    registry
}

fn gen_map(count: usize) -> MapView {
    let registry = gen_registry(count);
    let readings = ReadingSet::from_source(&registry, &mut MockReadings::new(1));
    MapView::new(registry, readings, Size::new(800.0, 600.0))
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensors/filter_by_id");
    for count in [64_usize, 512, 4096] {
        let registry = gen_registry(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &registry, |b, reg| {
            b.iter(|| black_box(reg.filter_by_id(black_box("2f-00")).count()));
        });
    }
    group.finish();
}

fn bench_hit_and_cull(c: &mut Criterion) {
    let map = gen_map(512);
    let probes: Vec<Point> = {
        let mut rng = Rng::new(0x81FD_BEE7_94F0_AF1A);
        (0..256)
            .map(|_| Point::new(rng.next_f64() * 800.0, rng.next_f64() * 600.0))
            .collect()
    };

    c.bench_function("map/hit_test", |b| {
        b.iter(|| {
            for &pt in &probes {
                black_box(map.hit_test(black_box(pt)));
            }
        });
    });

    c.bench_function("map/visible_markers", |b| {
        b.iter(|| black_box(map.visible_markers().len()));
    });
}

struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

criterion_group!(benches, bench_filter, bench_hit_and_cull);
criterion_main!(benches);
