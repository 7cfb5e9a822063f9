//! Short-horizon forecast generation.
//!
//! The forecast is a deliberately simple trend model, not a trained
//! predictor: each step re-projects the base reading through a
//! [`DriftModel`](crate::drift::DriftModel) and re-scores it with the AQI
//! calculator. Offsets run from zero up to (but excluding) the horizon in
//! fixed steps, so a 24-hour horizon at 6-hour steps yields points at
//! 0, 6, 12 and 18 hours.
//!
//! # Example
//!
//! ```
//! use skycast_core::{generate_forecast_seeded, Coordinates, PollutantReading};
//! use time::OffsetDateTime;
//!
//! let base = PollutantReading::new(
//!     Coordinates::new(45.52, -122.68).unwrap(),
//!     OffsetDateTime::UNIX_EPOCH,
//! )
//! .pm25(15.5)
//! .o3(60.0);
//!
//! let series = generate_forecast_seeded(&base, 24, 6, 42).unwrap();
//! assert_eq!(series.len(), 4);
//! assert_eq!(series.points[0].aqi.value, 67); // offset 0 is the base itself
//! ```

use time::Duration;
use tracing::debug;

use skycast_types::{
    DataOrigin, Error, ForecastPoint, ForecastSeries, PollutantReading, Result,
};

use crate::aqi::compute_aqi;
use crate::drift::{DriftModel, SeededDrift};

/// Longest supported forecast horizon, in hours (7 days).
pub const MAX_HORIZON_HOURS: u32 = 168;

/// Step size used by callers that don't have an opinion, in hours.
pub const DEFAULT_STEP_HOURS: u32 = 6;

/// Generate a forecast series from a base reading.
///
/// Points are produced at offsets `0, step, 2*step, ...` strictly below
/// `horizon_hours` (`⌈horizon/step⌉` points in total). Every projected
/// reading keeps the base reading's measured-pollutant set, applies the
/// drift factor for its offset (clamping at zero), and is tagged
/// [`DataOrigin::Synthetic`] with its timestamp advanced accordingly.
/// `generated_at` equals the base reading's timestamp; the generator
/// never consults a wall clock.
///
/// # Errors
///
/// - [`Error::InvalidHorizon`] if `horizon_hours` is zero or exceeds
///   [`MAX_HORIZON_HOURS`].
/// - [`Error::InvalidStep`] if `step_hours` is zero.
/// - [`Error::InsufficientData`] / [`Error::InvalidConcentration`]
///   propagated from the AQI calculator if the base reading is unusable;
///   checked before any point is produced.
pub fn generate_forecast(
    base: &PollutantReading,
    horizon_hours: u32,
    step_hours: u32,
    drift: &impl DriftModel,
) -> Result<ForecastSeries> {
    if horizon_hours == 0 || horizon_hours > MAX_HORIZON_HOURS {
        return Err(Error::InvalidHorizon {
            hours: horizon_hours,
            max: MAX_HORIZON_HOURS,
        });
    }
    if step_hours == 0 {
        return Err(Error::InvalidStep { step: step_hours });
    }

    // Reject a malformed base before producing any point.
    compute_aqi(base)?;

    let mut points = Vec::with_capacity(horizon_hours.div_ceil(step_hours) as usize);
    let mut offset = 0u32;
    while offset < horizon_hours {
        let reading = project(base, offset, drift);
        let aqi = compute_aqi(&reading)?;
        points.push(ForecastPoint {
            offset_hours: offset,
            reading,
            aqi,
        });
        offset += step_hours;
    }

    debug!(
        "generated {} forecast points over {} h at {}",
        points.len(),
        horizon_hours,
        base.location
    );

    Ok(ForecastSeries {
        location: base.location,
        horizon_hours,
        step_hours,
        generated_at: base.timestamp,
        points,
    })
}

/// Generate a forecast with the production [`SeededDrift`] model.
///
/// The drift stream is derived from `seed` and the base reading's
/// concentrations, so identical `(reading, horizon, step, seed)` inputs
/// always reproduce the same series.
///
/// # Errors
///
/// Same conditions as [`generate_forecast`].
pub fn generate_forecast_seeded(
    base: &PollutantReading,
    horizon_hours: u32,
    step_hours: u32,
    seed: u64,
) -> Result<ForecastSeries> {
    let drift = SeededDrift::for_reading(seed, base);
    generate_forecast(base, horizon_hours, step_hours, &drift)
}

fn project(
    base: &PollutantReading,
    offset_hours: u32,
    drift: &impl DriftModel,
) -> PollutantReading {
    let mut projected = base.clone();
    for (pollutant, value) in base.present() {
        let drifted = (value * drift.factor(pollutant, offset_hours)).max(0.0);
        projected.set_concentration(pollutant, Some(drifted));
    }
    projected.timestamp = base.timestamp + Duration::hours(i64::from(offset_hours));
    projected.origin = DataOrigin::Synthetic;
    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drift::NoDrift;
    use skycast_types::{Coordinates, Pollutant};
    use time::OffsetDateTime;

    fn base() -> PollutantReading {
        PollutantReading::new(
            Coordinates::new(45.52, -122.68).unwrap(),
            OffsetDateTime::UNIX_EPOCH,
        )
        .pm25(15.5)
        .pm10(45.0)
        .no2(25.0)
        .o3(60.0)
    }

    #[test]
    fn test_24h_horizon_6h_step_yields_four_points() {
        let series = generate_forecast(&base(), 24, 6, &NoDrift).unwrap();
        assert_eq!(series.len(), 4);
        let offsets: Vec<u32> = series.iter().map(|p| p.offset_hours).collect();
        assert_eq!(offsets, vec![0, 6, 12, 18]);
    }

    #[test]
    fn test_point_count_is_ceil_of_horizon_over_step() {
        let series = generate_forecast(&base(), 24, 7, &NoDrift).unwrap();
        let offsets: Vec<u32> = series.iter().map(|p| p.offset_hours).collect();
        assert_eq!(offsets, vec![0, 7, 14, 21]);

        let single = generate_forecast(&base(), 6, 6, &NoDrift).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.points[0].offset_hours, 0);
    }

    #[test]
    fn test_max_horizon_accepted() {
        let series = generate_forecast(&base(), MAX_HORIZON_HOURS, 6, &NoDrift).unwrap();
        assert_eq!(series.len(), 28);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = generate_forecast(&base(), 0, 6, &NoDrift).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidHorizon {
                hours: 0,
                max: MAX_HORIZON_HOURS
            }
        );
    }

    #[test]
    fn test_excessive_horizon_rejected() {
        let err = generate_forecast(&base(), 169, 6, &NoDrift).unwrap_err();
        assert!(matches!(err, Error::InvalidHorizon { hours: 169, .. }));
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = generate_forecast(&base(), 24, 0, &NoDrift).unwrap_err();
        assert_eq!(err, Error::InvalidStep { step: 0 });
    }

    #[test]
    fn test_empty_base_reading_propagates_insufficient_data() {
        let empty = PollutantReading::new(
            Coordinates::new(0.0, 0.0).unwrap(),
            OffsetDateTime::UNIX_EPOCH,
        );
        assert_eq!(
            generate_forecast(&empty, 24, 6, &NoDrift).unwrap_err(),
            Error::InsufficientData
        );
    }

    #[test]
    fn test_negative_base_concentration_propagates() {
        let bad = base().so2(-3.0);
        let err = generate_forecast(&bad, 24, 6, &NoDrift).unwrap_err();
        assert!(matches!(err, Error::InvalidConcentration { .. }));
    }

    #[test]
    fn test_no_drift_repeats_base_concentrations() {
        let series = generate_forecast(&base(), 24, 6, &NoDrift).unwrap();
        for point in series.iter() {
            assert_eq!(point.reading.pm25, Some(15.5));
            assert_eq!(point.reading.o3, Some(60.0));
            assert_eq!(point.aqi.value, 67);
            assert_eq!(point.aqi.primary_pollutant, Pollutant::O3);
        }
    }

    #[test]
    fn test_first_point_scores_the_base_reading() {
        let series = generate_forecast_seeded(&base(), 24, 6, 42).unwrap();
        let first = &series.points[0];
        assert_eq!(first.offset_hours, 0);
        assert_eq!(first.reading.pm25, Some(15.5));
        assert_eq!(first.aqi, compute_aqi(&base()).unwrap());
    }

    #[test]
    fn test_timestamps_advance_with_offset() {
        let series = generate_forecast(&base(), 24, 6, &NoDrift).unwrap();
        for point in series.iter() {
            assert_eq!(
                point.reading.timestamp,
                OffsetDateTime::UNIX_EPOCH + Duration::hours(i64::from(point.offset_hours))
            );
        }
    }

    #[test]
    fn test_projected_points_are_tagged_synthetic() {
        let series = generate_forecast_seeded(&base(), 12, 6, 1).unwrap();
        for point in series.iter() {
            assert_eq!(point.reading.origin, DataOrigin::Synthetic);
        }
    }

    #[test]
    fn test_unmeasured_pollutants_stay_unmeasured() {
        let series = generate_forecast_seeded(&base(), 24, 6, 9).unwrap();
        for point in series.iter() {
            assert_eq!(point.reading.co, None);
            assert_eq!(point.reading.so2, None);
        }
    }

    #[test]
    fn test_identical_inputs_reproduce_identical_series() {
        let a = generate_forecast_seeded(&base(), 72, 6, 1234).unwrap();
        let b = generate_forecast_seeded(&base(), 72, 6, 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_series_metadata() {
        let series = generate_forecast_seeded(&base(), 48, 12, 0).unwrap();
        assert_eq!(series.horizon_hours, 48);
        assert_eq!(series.step_hours, 12);
        assert_eq!(series.location, base().location);
        assert_eq!(series.generated_at, OffsetDateTime::UNIX_EPOCH);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::drift::SeededDrift;
    use proptest::prelude::*;
    use skycast_types::Coordinates;
    use time::OffsetDateTime;

    proptest! {
        /// Projected concentrations never go negative, even with drift
        /// far more aggressive than the production defaults.
        #[test]
        fn forecast_concentrations_never_negative(
            seed: u64,
            pm25 in 0.0f64..500.0,
            o3 in 0.0f64..400.0,
        ) {
            let base = PollutantReading::new(
                Coordinates::new(0.0, 0.0).unwrap(),
                OffsetDateTime::UNIX_EPOCH,
            )
            .pm25(pm25)
            .o3(o3);
            let drift = SeededDrift::new(seed).per_hour(0.5).max_swing(3.0);
            let series = generate_forecast(&base, 48, 6, &drift).unwrap();
            for point in series.iter() {
                for (_, concentration) in point.reading.present() {
                    prop_assert!(concentration >= 0.0);
                }
            }
        }

        /// Offsets are strictly increasing and stay below the horizon.
        #[test]
        fn forecast_offsets_ordered_and_bounded(
            horizon in 1u32..=168,
            step in 1u32..=24,
        ) {
            let base = PollutantReading::new(
                Coordinates::new(0.0, 0.0).unwrap(),
                OffsetDateTime::UNIX_EPOCH,
            )
            .pm25(10.0);
            let series = generate_forecast_seeded(&base, horizon, step, 7).unwrap();
            prop_assert_eq!(series.len() as u32, horizon.div_ceil(step));
            for pair in series.points.windows(2) {
                prop_assert!(pair[0].offset_hours < pair[1].offset_hours);
            }
            prop_assert!(series.points.last().unwrap().offset_hours < horizon);
        }
    }
}
