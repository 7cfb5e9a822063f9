//! Plausibility checks for pollutant readings.
//!
//! These are advisory bounds checks for flagging suspicious provider
//! data; they never block computation. Hard validation (negative values,
//! empty readings) lives in the AQI calculator, which rejects such input
//! with typed errors. A warning here means "worth logging", not "refuse
//! to compute".
//!
//! # Example
//!
//! ```
//! use skycast_core::{Coordinates, PollutantReading, ReadingValidator};
//! use time::OffsetDateTime;
//!
//! let validator = ReadingValidator::default();
//! let reading = PollutantReading::new(
//!     Coordinates::new(45.52, -122.68).unwrap(),
//!     OffsetDateTime::UNIX_EPOCH,
//! )
//! .pm25(15.5);
//!
//! let result = validator.validate(&reading);
//! assert!(result.is_valid);
//! assert!(!result.has_warnings());
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use skycast_types::{Pollutant, PollutantReading};

/// Warning types for validation issues.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new warning types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ValidationWarning {
    /// Concentration above the plausible ceiling for its pollutant.
    ImplausiblyHigh {
        pollutant: Pollutant,
        value: f64,
        max: f64,
    },
    /// Concentration is negative. The AQI calculator rejects such
    /// readings outright; the warning exists so a fetch layer can log
    /// the bad provider value before dropping it.
    Negative { pollutant: Pollutant, value: f64 },
    /// Concentration is NaN or infinite.
    NotFinite { pollutant: Pollutant },
    /// No pollutant measured at all.
    NoPollutants,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::ImplausiblyHigh {
                pollutant,
                value,
                max,
            } => {
                write!(
                    f,
                    "{} {} {} exceeds plausible maximum {} {}",
                    pollutant,
                    value,
                    pollutant.unit(),
                    max,
                    pollutant.unit()
                )
            }
            ValidationWarning::Negative { pollutant, value } => {
                write!(f, "{pollutant} concentration {value} is negative")
            }
            ValidationWarning::NotFinite { pollutant } => {
                write!(f, "{pollutant} concentration is not a finite number")
            }
            ValidationWarning::NoPollutants => {
                write!(f, "reading contains no pollutant measurements")
            }
        }
    }
}

/// Result of validating a reading.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the reading is usable for AQI computation.
    pub is_valid: bool,
    /// List of warnings (may be non-empty even if valid).
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Check if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Plausible ceilings per pollutant, in table-native units.
///
/// Defaults sit well above each breakpoint table's top bracket; a value
/// beyond them is more likely a provider glitch than a real episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Maximum plausible PM2.5 (µg/m³).
    pub pm25_max: f64,
    /// Maximum plausible PM10 (µg/m³).
    pub pm10_max: f64,
    /// Maximum plausible NO₂ (ppb).
    pub no2_max: f64,
    /// Maximum plausible O₃ (ppb).
    pub o3_max: f64,
    /// Maximum plausible CO (ppm).
    pub co_max: f64,
    /// Maximum plausible SO₂ (ppb).
    pub so2_max: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            pm25_max: 1000.0,
            pm10_max: 2000.0,
            no2_max: 2500.0,
            o3_max: 800.0,
            co_max: 75.0,
            so2_max: 1500.0,
        }
    }
}

impl ValidatorConfig {
    /// Create a config with default ceilings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PM2.5 ceiling (µg/m³).
    #[must_use]
    pub fn pm25_max(mut self, max: f64) -> Self {
        self.pm25_max = max;
        self
    }

    /// Set the PM10 ceiling (µg/m³).
    #[must_use]
    pub fn pm10_max(mut self, max: f64) -> Self {
        self.pm10_max = max;
        self
    }

    /// Set the NO₂ ceiling (ppb).
    #[must_use]
    pub fn no2_max(mut self, max: f64) -> Self {
        self.no2_max = max;
        self
    }

    /// Set the O₃ ceiling (ppb).
    #[must_use]
    pub fn o3_max(mut self, max: f64) -> Self {
        self.o3_max = max;
        self
    }

    /// Set the CO ceiling (ppm).
    #[must_use]
    pub fn co_max(mut self, max: f64) -> Self {
        self.co_max = max;
        self
    }

    /// Set the SO₂ ceiling (ppb).
    #[must_use]
    pub fn so2_max(mut self, max: f64) -> Self {
        self.so2_max = max;
        self
    }

    /// Ceiling for one pollutant.
    #[must_use]
    pub fn max_for(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25_max,
            Pollutant::Pm10 => self.pm10_max,
            Pollutant::No2 => self.no2_max,
            Pollutant::O3 => self.o3_max,
            Pollutant::Co => self.co_max,
            Pollutant::So2 => self.so2_max,
        }
    }
}

/// Plausibility validator for readings.
#[derive(Debug, Clone, Default)]
pub struct ReadingValidator {
    config: ValidatorConfig,
}

impl ReadingValidator {
    /// Create a validator with the given config.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a reading against the configured ceilings.
    ///
    /// A reading is invalid only when the AQI calculator would reject it
    /// (empty, or a negative concentration); implausibly high values
    /// produce warnings but stay valid.
    #[must_use]
    pub fn validate(&self, reading: &PollutantReading) -> ValidationResult {
        let mut warnings = Vec::new();
        let mut is_valid = true;

        if reading.is_empty() {
            warnings.push(ValidationWarning::NoPollutants);
            is_valid = false;
        }

        for (pollutant, value) in reading.present() {
            if !value.is_finite() {
                warnings.push(ValidationWarning::NotFinite { pollutant });
                is_valid = false;
            } else if value < 0.0 {
                warnings.push(ValidationWarning::Negative { pollutant, value });
                is_valid = false;
            } else if value > self.config.max_for(pollutant) {
                warnings.push(ValidationWarning::ImplausiblyHigh {
                    pollutant,
                    value,
                    max: self.config.max_for(pollutant),
                });
            }
        }

        ValidationResult { is_valid, warnings }
    }
}
