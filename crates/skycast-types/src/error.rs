//! Error types shared across the skycast crates.

use thiserror::Error;

use crate::types::Pollutant;

/// Errors produced by AQI computation and forecast generation.
///
/// All variants are local validation failures surfaced directly to the
/// caller. Nothing is retried or silently recovered; fallback behavior
/// (mock data, defaults) belongs to the application layer, not here.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The reading carried no pollutant concentrations at all.
    #[error("no pollutant concentrations present in reading")]
    InsufficientData,

    /// A supplied concentration was negative or not a finite number.
    #[error("invalid {pollutant} concentration: {value}")]
    InvalidConcentration {
        /// The pollutant whose concentration was rejected.
        pollutant: Pollutant,
        /// The offending value.
        value: f64,
    },

    /// Requested forecast horizon is zero or beyond the supported maximum.
    #[error("invalid forecast horizon: {hours} h (supported range is 1-{max} h)")]
    InvalidHorizon {
        /// The requested horizon in hours.
        hours: u32,
        /// The maximum supported horizon in hours.
        max: u32,
    },

    /// Requested forecast step size is zero.
    #[error("invalid forecast step: {step} h (must be at least 1 h)")]
    InvalidStep {
        /// The requested step in hours.
        step: u32,
    },

    /// Latitude or longitude outside the valid geographic range.
    #[error("coordinates out of range: lat {latitude}, lon {longitude}")]
    InvalidCoordinates {
        /// The rejected latitude.
        latitude: f64,
        /// The rejected longitude.
        longitude: f64,
    },
}

/// Result type alias using skycast's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
