// Copyright 2025 the Floorsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashMap;

use crate::registry::SensorRegistry;
use crate::sensor::{Sensor, SensorStatus};

/// Ephemeral measured state for one sensor.
///
/// Readings carry no identity of their own; they are keyed by sensor id
/// inside a [`ReadingSet`]. Temperature and humidity are optional — an
/// absent field is displayed as such, never treated as an error.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SensorReading {
    /// Temperature in °C, if the sensor reports one.
    pub temperature: Option<f64>,
    /// Relative humidity in %, if the sensor reports one.
    pub humidity: Option<f64>,
    /// Health classification.
    pub status: SensorStatus,
    /// Caller-supplied update time, epoch milliseconds.
    pub updated_at_ms: u64,
}

/// Produces a reading for a sensor.
///
/// Sources are injected by the caller, which keeps reading content
/// deterministic and testable. A source may be a fixed table, a replayed
/// script, or (behind the `mock` feature) a seeded generator reproducing the
/// dashboard's historical random data.
pub trait ReadingSource {
    /// Returns the current reading for `sensor`.
    fn reading_for(&mut self, sensor: &Sensor) -> SensorReading;
}

impl<F> ReadingSource for F
where
    F: FnMut(&Sensor) -> SensorReading,
{
    fn reading_for(&mut self, sensor: &Sensor) -> SensorReading {
        self(sensor)
    }
}

/// One reading per registered sensor.
///
/// A `ReadingSet` is always built against a [`SensorRegistry`] and holds
/// exactly one [`SensorReading`] for every sensor in it — the dashboard's
/// one data invariant. [`ReadingSet::refresh`] regenerates every reading
/// from a source, which is the explicit form of the historical
/// regenerate-on-render behavior.
#[derive(Clone, Debug, Default)]
pub struct ReadingSet {
    readings: HashMap<String, SensorReading>,
}

impl ReadingSet {
    /// Builds a set with one reading per sensor in `registry`.
    #[must_use]
    pub fn from_source<S: ReadingSource>(registry: &SensorRegistry, source: &mut S) -> Self {
        let mut set = Self::default();
        set.refresh(registry, source);
        set
    }

    /// Regenerates every reading from `source`.
    ///
    /// Readings for sensors no longer in `registry` are dropped, so the
    /// one-reading-per-sensor invariant holds afterwards.
    pub fn refresh<S: ReadingSource>(&mut self, registry: &SensorRegistry, source: &mut S) {
        self.readings.clear();
        for sensor in registry {
            self.readings
                .insert(String::from(sensor.id()), source.reading_for(sensor));
        }
    }

    /// Returns the reading for a sensor id, if the sensor is known.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SensorReading> {
        self.readings.get(id)
    }

    /// Returns the number of readings held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns `true` if the set holds no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{ReadingSet, SensorReading};
    use crate::registry::SensorRegistry;
    use crate::sensor::{Sensor, SensorStatus, SensorZone};

    fn registry() -> SensorRegistry {
        let mut registry = SensorRegistry::new();
        registry
            .register(Sensor::new("A-1F-01", Point::new(1.0, 2.0), SensorZone::FloorOne))
            .unwrap();
        registry
            .register(Sensor::new("B-2F-05", Point::new(3.0, 4.0), SensorZone::FloorTwo))
            .unwrap();
        registry
    }

    #[test]
    fn one_reading_per_registered_sensor() {
        let registry = registry();
        let mut source = |_: &Sensor| SensorReading {
            temperature: Some(21.5),
            humidity: Some(40.0),
            status: SensorStatus::Normal,
            updated_at_ms: 1_000,
        };

        let set = ReadingSet::from_source(&registry, &mut source);
        assert_eq!(set.len(), registry.len());
        assert!(set.get("A-1F-01").is_some());
        assert!(set.get("B-2F-05").is_some());
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn refresh_replaces_previous_readings() {
        let registry = registry();
        let mut warm = |_: &Sensor| SensorReading {
            temperature: Some(30.0),
            ..SensorReading::default()
        };
        let mut cold = |_: &Sensor| SensorReading {
            temperature: Some(10.0),
            status: SensorStatus::Warning,
            ..SensorReading::default()
        };

        let mut set = ReadingSet::from_source(&registry, &mut warm);
        assert_eq!(set.get("A-1F-01").unwrap().temperature, Some(30.0));

        set.refresh(&registry, &mut cold);
        let reading = set.get("A-1F-01").unwrap();
        assert_eq!(reading.temperature, Some(10.0));
        assert_eq!(reading.status, SensorStatus::Warning);
        assert_eq!(set.len(), registry.len());
    }

    #[test]
    fn absent_fields_stay_absent() {
        let registry = registry();
        let mut bare = |_: &Sensor| SensorReading::default();

        let set = ReadingSet::from_source(&registry, &mut bare);
        let reading = set.get("B-2F-05").unwrap();
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.status, SensorStatus::Normal);
    }
}
