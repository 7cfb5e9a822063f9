//! Shared domain types for skycast air-quality assessment.
//!
//! This crate provides the types passed between the computation core
//! (skycast-core) and any surrounding application layer.
//!
//! # Features
//!
//! - Pollutant readings with optional per-pollutant concentrations
//! - AQI result and category types with EPA colors
//! - Forecast point/series containers
//! - Error taxonomy for validation failures
//!
//! # Example
//!
//! ```
//! use skycast_types::{Coordinates, DataOrigin, PollutantReading};
//! use time::OffsetDateTime;
//!
//! let reading = PollutantReading::new(
//!     Coordinates::new(45.52, -122.68).unwrap(),
//!     OffsetDateTime::UNIX_EPOCH,
//! )
//! .pm25(15.5)
//! .origin(DataOrigin::GroundStation("880230021".into()));
//!
//! assert!(!reading.is_empty());
//! ```

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    AqiCategory, AqiResult, Coordinates, DataOrigin, ForecastPoint, ForecastSeries, Pollutant,
    PollutantReading,
};
