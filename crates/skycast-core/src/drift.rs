//! Drift models for forecast projection.
//!
//! A drift model supplies the multiplicative perturbation applied to each
//! pollutant concentration at each forecast offset. The production model
//! ([`SeededDrift`]) is pseudo-random but fully determined by its seed and
//! the `(pollutant, offset)` pair, so a forecast is reproducible from its
//! inputs; there is no global RNG state anywhere. [`NoDrift`] is the
//! identity model for tests and persistence-style forecasts.
//!
//! # Example
//!
//! ```
//! use skycast_core::drift::{DriftModel, SeededDrift};
//! use skycast_types::Pollutant;
//!
//! let drift = SeededDrift::new(42);
//! let a = drift.factor(Pollutant::Pm25, 6);
//! let b = drift.factor(Pollutant::Pm25, 6);
//! assert_eq!(a, b); // same seed, same inputs, same factor
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use skycast_types::{Pollutant, PollutantReading};

/// Source of per-step concentration perturbations.
///
/// Implementations must be pure: the factor for a given
/// `(pollutant, offset_hours)` pair may not change between calls, and it
/// must never be negative. A factor of `1.0` leaves the concentration
/// unchanged.
pub trait DriftModel {
    /// Multiplicative factor for one pollutant at one forecast offset.
    fn factor(&self, pollutant: Pollutant, offset_hours: u32) -> f64;
}

/// The identity drift: every factor is `1.0`.
///
/// Produces a "persistence" forecast that repeats the base reading at
/// every offset. Mainly useful in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDrift;

impl DriftModel for NoDrift {
    fn factor(&self, _pollutant: Pollutant, _offset_hours: u32) -> f64 {
        1.0
    }
}

/// Seeded pseudo-random drift with time-proportional amplitude.
///
/// The swing available to a factor grows linearly with the forecast
/// offset (`per_hour` per hour) and saturates at `max_swing`, so
/// near-term points stay close to the base reading while far points may
/// wander up to the cap. Defaults cap at ±20%.
///
/// Each `(pollutant, offset)` pair gets its own RNG stream derived from
/// the seed, so factors are independent across pollutants and offsets
/// but stable across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeededDrift {
    seed: u64,
    per_hour: f64,
    max_swing: f64,
}

impl SeededDrift {
    /// Default amplitude growth per forecast hour.
    pub const DEFAULT_PER_HOUR: f64 = 0.02;
    /// Default amplitude cap.
    pub const DEFAULT_MAX_SWING: f64 = 0.20;

    /// Create a drift model from a bare seed with default amplitudes.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            per_hour: Self::DEFAULT_PER_HOUR,
            max_swing: Self::DEFAULT_MAX_SWING,
        }
    }

    /// Create a drift model whose seed also folds in the base reading's
    /// measured concentrations, so distinct readings get distinct drift
    /// streams even under the same caller seed.
    #[must_use]
    pub fn for_reading(seed: u64, reading: &PollutantReading) -> Self {
        let mut acc = seed;
        for (pollutant, value) in reading.present() {
            acc = mix(acc ^ ((pollutant as u64) << 56) ^ value.to_bits());
        }
        Self::new(acc)
    }

    /// Set the amplitude growth rate per hour.
    #[must_use]
    pub fn per_hour(mut self, rate: f64) -> Self {
        self.per_hour = rate;
        self
    }

    /// Set the amplitude cap.
    #[must_use]
    pub fn max_swing(mut self, swing: f64) -> Self {
        self.max_swing = swing;
        self
    }

    fn amplitude(&self, offset_hours: u32) -> f64 {
        (self.per_hour * f64::from(offset_hours)).min(self.max_swing)
    }
}

impl DriftModel for SeededDrift {
    fn factor(&self, pollutant: Pollutant, offset_hours: u32) -> f64 {
        if offset_hours == 0 {
            return 1.0;
        }
        let stream = mix(self.seed ^ mix(((pollutant as u64) << 32) | u64::from(offset_hours)));
        let mut rng = StdRng::seed_from_u64(stream);
        let unit: f64 = rng.random_range(-1.0..=1.0);
        (1.0 + unit * self.amplitude(offset_hours)).max(0.0)
    }
}

/// splitmix64 finalizer, used to derive independent RNG streams.
fn mix(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
