//! AQI computation from pollutant concentrations.
//!
//! Implements the EPA breakpoint method: each measured pollutant gets a
//! sub-index by linear interpolation within its breakpoint bracket, and
//! the overall index is the maximum sub-index. The pollutant that
//! produced the maximum is reported as the primary pollutant.
//!
//! # Example
//!
//! ```
//! use skycast_core::{compute_aqi, Coordinates, PollutantReading};
//! use skycast_types::{AqiCategory, Pollutant};
//! use time::OffsetDateTime;
//!
//! let reading = PollutantReading::new(
//!     Coordinates::new(45.52, -122.68).unwrap(),
//!     OffsetDateTime::UNIX_EPOCH,
//! )
//! .pm25(15.5)
//! .pm10(45.0)
//! .no2(25.0)
//! .o3(60.0);
//!
//! let result = compute_aqi(&reading).unwrap();
//! assert_eq!(result.value, 67);
//! assert_eq!(result.primary_pollutant, Pollutant::O3);
//! assert_eq!(result.category, AqiCategory::Moderate);
//! ```

use tracing::{debug, trace};

use skycast_types::{AqiResult, Error, Pollutant, PollutantReading, Result};

use crate::breakpoints::{self, MAX_AQI};

/// Compute the sub-index for a single pollutant concentration.
///
/// The concentration is located in the pollutant's breakpoint table and
/// linearly interpolated onto the corresponding AQI bracket. A value in
/// the reporting gap between two brackets (e.g. PM2.5 12.05 µg/m³) snaps
/// up to the next bracket's floor. Concentrations above the top bracket
/// clamp to [`MAX_AQI`]; the tables are not extrapolated.
///
/// # Errors
///
/// Returns [`Error::InvalidConcentration`] if `concentration` is negative
/// or not finite.
///
/// # Examples
///
/// ```
/// use skycast_core::aqi::sub_index;
/// use skycast_types::Pollutant;
///
/// assert_eq!(sub_index(Pollutant::Pm25, 12.0).unwrap(), 50);
/// assert_eq!(sub_index(Pollutant::Pm25, 35.5).unwrap(), 101);
/// assert!(sub_index(Pollutant::Pm25, -1.0).is_err());
/// ```
pub fn sub_index(pollutant: Pollutant, concentration: f64) -> Result<u16> {
    if !concentration.is_finite() || concentration < 0.0 {
        return Err(Error::InvalidConcentration {
            pollutant,
            value: concentration,
        });
    }

    for row in breakpoints::table(pollutant) {
        if concentration <= row.concentration_high {
            // Values in the gap below this bracket's floor snap to the floor.
            let c = concentration.max(row.concentration_low);
            let span = row.concentration_high - row.concentration_low;
            let index = f64::from(row.aqi_high - row.aqi_low) / span
                * (c - row.concentration_low)
                + f64::from(row.aqi_low);
            let index = index.round() as u16;
            trace!(
                "{} {} {} -> sub-index {}",
                pollutant,
                concentration,
                pollutant.unit(),
                index
            );
            return Ok(index);
        }
    }

    // Above the top of the table: clamp, never extrapolate.
    trace!(
        "{} {} {} beyond top bracket, clamped to {}",
        pollutant,
        concentration,
        pollutant.unit(),
        MAX_AQI
    );
    Ok(MAX_AQI)
}

/// Compute the overall AQI for a reading.
///
/// Every measured pollutant contributes a sub-index; the overall value is
/// the maximum, with ties broken in favor of the pollutant earlier in
/// [`Pollutant::ALL`] order. Partial readings are fine; a reading with no
/// measured pollutant at all is rejected rather than defaulted.
///
/// # Errors
///
/// - [`Error::InsufficientData`] if no pollutant is present.
/// - [`Error::InvalidConcentration`] if any present concentration is
///   negative or non-finite. Checked up front, so a bad value never
///   produces a half-computed result.
pub fn compute_aqi(reading: &PollutantReading) -> Result<AqiResult> {
    for (pollutant, concentration) in reading.present() {
        if !concentration.is_finite() || concentration < 0.0 {
            return Err(Error::InvalidConcentration {
                pollutant,
                value: concentration,
            });
        }
    }

    let mut max: Option<(Pollutant, u16)> = None;
    for (pollutant, concentration) in reading.present() {
        let index = sub_index(pollutant, concentration)?;
        match max {
            Some((_, best)) if index <= best => {}
            _ => max = Some((pollutant, index)),
        }
    }

    let (primary, value) = max.ok_or(Error::InsufficientData)?;
    let result = AqiResult::new(value, primary);
    debug!(
        "AQI {} ({}) at {}, primary {}",
        result.value, result.category, reading.location, primary
    );
    Ok(result)
}
