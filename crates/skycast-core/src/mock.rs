//! Synthetic readings for tests and offline development.
//!
//! When no upstream provider is reachable, the application layer falls
//! back to a [`MockStation`]: a [`ReadingSource`] that fabricates
//! readings around a mild-urban-day baseline. All randomness is seeded,
//! so a station constructed with the same seed replays the same sequence
//! of readings.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::OffsetDateTime;
use tracing::debug;

use skycast_types::{Coordinates, DataOrigin, PollutantReading, Result};

use crate::traits::ReadingSource;

/// A mock monitoring station producing deterministic synthetic readings.
///
/// # Example
///
/// ```
/// use skycast_core::{Coordinates, MockStation, ReadingSource};
///
/// let mut station = MockStation::new(42).variation(0.0);
/// let location = Coordinates::new(45.52, -122.68).unwrap();
/// let reading = station.current(location).unwrap();
///
/// assert_eq!(reading.pm25, Some(MockStation::BASE_PM25));
/// ```
#[derive(Debug, Clone)]
pub struct MockStation {
    seed: u64,
    variation: f64,
    fixed_timestamp: Option<OffsetDateTime>,
    calls: u64,
}

impl MockStation {
    /// Baseline PM2.5 concentration (µg/m³).
    pub const BASE_PM25: f64 = 15.5;
    /// Baseline PM10 concentration (µg/m³).
    pub const BASE_PM10: f64 = 45.0;
    /// Baseline NO₂ concentration (ppb).
    pub const BASE_NO2: f64 = 25.0;
    /// Baseline O₃ concentration (ppb).
    pub const BASE_O3: f64 = 60.0;

    /// Create a station with the given seed and the default ±20%
    /// per-call variation.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            variation: 0.2,
            fixed_timestamp: None,
            calls: 0,
        }
    }

    /// Set the per-call variation amplitude (`0.0` disables variation so
    /// every reading repeats the baseline exactly).
    #[must_use]
    pub fn variation(mut self, variation: f64) -> Self {
        self.variation = variation;
        self
    }

    /// Stamp every reading with a fixed timestamp instead of the wall
    /// clock. Readings become fully reproducible; used in tests.
    #[must_use]
    pub fn fixed_timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.fixed_timestamp = Some(timestamp);
        self
    }

    fn vary(&self, rng: &mut StdRng, base: f64) -> f64 {
        let unit: f64 = rng.random_range(-1.0..=1.0);
        (base * (1.0 + unit * self.variation)).max(0.0)
    }
}

impl ReadingSource for MockStation {
    fn current(&mut self, location: Coordinates) -> Result<PollutantReading> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.calls));
        self.calls += 1;

        let timestamp = self
            .fixed_timestamp
            .unwrap_or_else(OffsetDateTime::now_utc);

        let reading = PollutantReading::new(location, timestamp)
            .pm25(self.vary(&mut rng, Self::BASE_PM25))
            .pm10(self.vary(&mut rng, Self::BASE_PM10))
            .no2(self.vary(&mut rng, Self::BASE_NO2))
            .o3(self.vary(&mut rng, Self::BASE_O3))
            .origin(DataOrigin::Synthetic);

        debug!("mock reading at {} (call {})", location, self.calls);
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_types::Pollutant;

    fn location() -> Coordinates {
        Coordinates::new(45.52, -122.68).unwrap()
    }

    #[test]
    fn test_zero_variation_repeats_baseline() {
        let mut station = MockStation::new(1).variation(0.0);
        let reading = station.current(location()).unwrap();
        assert_eq!(reading.pm25, Some(MockStation::BASE_PM25));
        assert_eq!(reading.pm10, Some(MockStation::BASE_PM10));
        assert_eq!(reading.no2, Some(MockStation::BASE_NO2));
        assert_eq!(reading.o3, Some(MockStation::BASE_O3));
        assert_eq!(reading.co, None);
        assert_eq!(reading.so2, None);
    }

    #[test]
    fn test_readings_are_tagged_synthetic() {
        let mut station = MockStation::new(1);
        let reading = station.current(location()).unwrap();
        assert_eq!(reading.origin, DataOrigin::Synthetic);
    }

    #[test]
    fn test_same_seed_replays_same_sequence() {
        let timestamp = OffsetDateTime::UNIX_EPOCH;
        let mut a = MockStation::new(42).fixed_timestamp(timestamp);
        let mut b = MockStation::new(42).fixed_timestamp(timestamp);
        for _ in 0..3 {
            assert_eq!(
                a.current(location()).unwrap(),
                b.current(location()).unwrap()
            );
        }
    }

    #[test]
    fn test_concentrations_stay_non_negative() {
        // Variation far above 100% exercises the zero clamp.
        let mut station = MockStation::new(7).variation(5.0);
        for _ in 0..20 {
            let reading = station.current(location()).unwrap();
            for (_, concentration) in reading.present() {
                assert!(concentration >= 0.0);
            }
        }
    }

    #[test]
    fn test_variation_stays_within_amplitude() {
        let mut station = MockStation::new(3).variation(0.2);
        for _ in 0..10 {
            let reading = station.current(location()).unwrap();
            let pm25 = reading.concentration(Pollutant::Pm25).unwrap();
            assert!(pm25 >= MockStation::BASE_PM25 * 0.8 - 1e-9);
            assert!(pm25 <= MockStation::BASE_PM25 * 1.2 + 1e-9);
        }
    }

    #[test]
    fn test_fixed_timestamp_is_applied() {
        let timestamp = OffsetDateTime::UNIX_EPOCH;
        let mut station = MockStation::new(1).fixed_timestamp(timestamp);
        assert_eq!(station.current(location()).unwrap().timestamp, timestamp);
    }

    #[test]
    fn test_mock_reading_feeds_the_calculator() {
        let mut station = MockStation::new(42).variation(0.0);
        let reading = station.current(location()).unwrap();
        let result = crate::aqi::compute_aqi(&reading).unwrap();
        // Baseline concentrations put O3 on top, same as the live path.
        assert_eq!(result.value, 67);
        assert_eq!(result.primary_pollutant, Pollutant::O3);
    }
}
