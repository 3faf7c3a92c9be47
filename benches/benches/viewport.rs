// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

use floorsight_view2d::MapViewport;

fn gen_pointer_path(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * 800.0, rng.next_f64() * 600.0))
        .collect()
}

fn bench_conversions(c: &mut Criterion) {
    let vp = MapViewport::new(Size::new(800.0, 600.0));
    let points = gen_pointer_path(1024);

    c.bench_function("view2d/plan_to_view_point", |b| {
        b.iter(|| {
            for &pt in &points {
                black_box(vp.plan_to_view_point(black_box(pt)));
            }
        });
    });

    c.bench_function("view2d/view_to_plan_point", |b| {
        b.iter(|| {
            for &pt in &points {
                black_box(vp.view_to_plan_point(black_box(pt)));
            }
        });
    });
}

fn bench_interaction_sequences(c: &mut Criterion) {
    let path = gen_pointer_path(256);

    c.bench_function("view2d/drag_sequence", |b| {
        b.iter(|| {
            let mut vp = MapViewport::new(Size::new(800.0, 600.0));
            vp.begin_drag(path[0]);
            for &pt in &path[1..] {
                vp.drag_to(pt);
            }
            vp.end_drag();
            black_box(vp.offset())
        });
    });

    c.bench_function("view2d/anchored_zoom_sequence", |b| {
        b.iter(|| {
            let mut vp = MapViewport::new(Size::new(800.0, 600.0));
            for (i, &pt) in path.iter().enumerate() {
                let delta = if i % 2 == 0 { 0.05 } else { -0.05 };
                vp.zoom_by(delta, pt);
            }
            black_box(vp.scale())
        });
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

criterion_group!(benches, bench_conversions, bench_interaction_sequences);
criterion_main!(benches);
