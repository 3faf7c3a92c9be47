// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::reading::{ReadingSource, SensorReading};
use crate::sensor::{Sensor, SensorStatus};

/// Seeded mock reading source.
///
/// Reproduces the dashboard's historical demo data — whole-degree
/// temperatures in 20–50 °C, whole-percent humidity in 30–80 %, and a status
/// drawn uniformly from the three variants — but from an explicit seed, so a
/// given seed always produces the same sequence.
#[derive(Clone, Debug)]
pub struct MockReadings {
    rng: Rng,
    now_ms: u64,
}

impl MockReadings {
    /// Creates a source from a seed, stamping readings with time zero.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            now_ms: 0,
        }
    }

    /// Sets the timestamp stamped onto generated readings.
    #[must_use]
    pub fn at(mut self, now_ms: u64) -> Self {
        self.now_ms = now_ms;
        self
    }
}

impl ReadingSource for MockReadings {
    fn reading_for(&mut self, _sensor: &Sensor) -> SensorReading {
        let temperature = whole(self.rng.next_f64() * 30.0 + 20.0);
        let humidity = whole(self.rng.next_f64() * 50.0 + 30.0);
        let status = match self.rng.next_u64() % 3 {
            0 => SensorStatus::Normal,
            1 => SensorStatus::Warning,
            _ => SensorStatus::Critical,
        };
        SensorReading {
            temperature: Some(temperature),
            humidity: Some(humidity),
            status,
            updated_at_ms: self.now_ms,
        }
    }
}

/// Rounds a small non-negative value to a whole number without `std`.
fn whole(value: f64) -> f64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "mock values are bounded well inside u32 range"
    )]
    let rounded = (value + 0.5) as u32;
    f64::from(rounded)
}

/// Xorshift64 generator; small, seedable, and dependency-free.
#[derive(Clone, Debug)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed | 1)
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
