//! AQI computation and short-horizon forecasting for air-quality data.
//!
//! This crate is the computation core of skycast: it turns raw pollutant
//! concentrations into standardized EPA Air Quality Index values and
//! derives bounded forecast series from a current reading. It performs
//! no I/O and holds no state; fetching readings from providers and
//! serving results over HTTP are the surrounding application's job.
//!
//! # Features
//!
//! - **AQI computation**: EPA breakpoint method over six criteria
//!   pollutants, max-aggregated with a primary pollutant
//! - **Forecasting**: stepwise trend projection with injectable,
//!   seeded drift models
//! - **Validation**: advisory plausibility checks for provider data
//! - **Mock source**: deterministic synthetic readings for tests and
//!   offline fallback
//!
//! Every function here is pure and synchronous; concurrent callers need
//! no locking because there is nothing shared to lock.
//!
//! # Quick Start
//!
//! ```
//! use skycast_core::{compute_aqi, generate_forecast_seeded};
//! use skycast_core::{Coordinates, PollutantReading};
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
//! // Current conditions
//! let current = compute_aqi(&reading).unwrap();
//! println!("AQI {} ({})", current.value, current.category);
//!
//! // 24-hour forecast in 6-hour steps
//! let series = generate_forecast_seeded(&reading, 24, 6, 42).unwrap();
//! for point in series.iter() {
//!     println!("+{:>3} h: AQI {}", point.offset_hours, point.aqi.value);
//! }
//! ```

pub mod aqi;
pub mod breakpoints;
pub mod drift;
pub mod forecast;
pub mod mock;
pub mod traits;
pub mod validation;

// Core exports
pub use aqi::{compute_aqi, sub_index};
pub use breakpoints::{Breakpoint, MAX_AQI};
pub use drift::{DriftModel, NoDrift, SeededDrift};
pub use forecast::{
    generate_forecast, generate_forecast_seeded, DEFAULT_STEP_HOURS, MAX_HORIZON_HOURS,
};
pub use mock::MockStation;
pub use traits::ReadingSource;
pub use validation::{ReadingValidator, ValidationResult, ValidationWarning, ValidatorConfig};

// Re-export the shared domain types so most callers only need one crate.
pub use skycast_types::{
    AqiCategory, AqiResult, Coordinates, DataOrigin, Error, ForecastPoint, ForecastSeries,
    Pollutant, PollutantReading, Result,
};
