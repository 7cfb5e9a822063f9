//! Core types for air-quality readings and AQI assessment.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use time::OffsetDateTime;

use crate::error::Error;

/// A criteria pollutant tracked by the Air Quality Index.
///
/// The variant set is closed on purpose: the EPA index is defined over
/// exactly these six pollutants, so unlike an open key-value map there is
/// no way for an unknown pollutant name to enter the pipeline.
///
/// # Units
///
/// Concentrations are expressed in each pollutant's table-native unit:
/// µg/m³ for particulates, ppb for NO₂/O₃/SO₂, and ppm for CO. See
/// [`Pollutant::unit`].
///
/// # Examples
///
/// ```
/// use skycast_types::Pollutant;
///
/// assert_eq!(Pollutant::Pm25.key(), "pm25");
/// assert_eq!(Pollutant::Co.unit(), "ppm");
/// assert_eq!(format!("{}", Pollutant::O3), "O3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pollutant {
    /// Fine particulate matter, aerodynamic diameter ≤ 2.5 µm.
    Pm25,
    /// Coarse particulate matter, aerodynamic diameter ≤ 10 µm.
    Pm10,
    /// Nitrogen dioxide.
    No2,
    /// Ozone.
    O3,
    /// Carbon monoxide.
    Co,
    /// Sulfur dioxide.
    So2,
}

impl Pollutant {
    /// All pollutants, in the fixed order used for aggregation and
    /// primary-pollutant tie-breaking.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::Co,
        Pollutant::So2,
    ];

    /// Serialization key for this pollutant (`"pm25"`, `"o3"`, ...).
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
            Pollutant::Co => "co",
            Pollutant::So2 => "so2",
        }
    }

    /// Measurement unit this pollutant's concentrations are expressed in.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "µg/m³",
            Pollutant::No2 | Pollutant::O3 | Pollutant::So2 => "ppb",
            Pollutant::Co => "ppm",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pollutant::Pm25 => write!(f, "PM2.5"),
            Pollutant::Pm10 => write!(f, "PM10"),
            Pollutant::No2 => write!(f, "NO2"),
            Pollutant::O3 => write!(f, "O3"),
            Pollutant::Co => write!(f, "CO"),
            Pollutant::So2 => write!(f, "SO2"),
        }
    }
}

/// A geographic position.
///
/// Construct with [`Coordinates::new`] to get range validation; the fields
/// stay public for pattern matching and serialization.
///
/// # Examples
///
/// ```
/// use skycast_types::Coordinates;
///
/// let portland = Coordinates::new(45.52, -122.68).unwrap();
/// assert!((portland.latitude - 45.52).abs() < f64::EPSILON);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// assert!(Coordinates::new(0.0, -180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    /// Latitude in decimal degrees, range [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, range [-180, 180].
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates, validating geographic range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinates`] if either component is
    /// non-finite or outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if lat_ok && lon_ok {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(Error::InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Provenance of a reading.
///
/// Informational only; computation never branches on it.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new origins
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum DataOrigin {
    /// Measured by an identified ground monitoring station.
    GroundStation(String),
    /// Derived from satellite observation.
    Satellite,
    /// Produced by a mock or simulation source.
    Synthetic,
    /// Provider did not report provenance.
    #[default]
    Unknown,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::GroundStation(id) => write!(f, "station {id}"),
            DataOrigin::Satellite => write!(f, "satellite"),
            DataOrigin::Synthetic => write!(f, "synthetic"),
            DataOrigin::Unknown => write!(f, "unknown"),
        }
    }
}

/// A point-in-time set of pollutant measurements for one location.
///
/// Each pollutant field is optional: `None` means "not measured", which is
/// distinct from a measured concentration of zero. A reading is usable for
/// AQI computation as long as at least one pollutant is present.
///
/// # Examples
///
/// ```
/// use skycast_types::{Coordinates, Pollutant, PollutantReading};
/// use time::OffsetDateTime;
///
/// let reading = PollutantReading::new(
///     Coordinates::new(45.52, -122.68).unwrap(),
///     OffsetDateTime::UNIX_EPOCH,
/// )
/// .pm25(15.5)
/// .o3(60.0);
///
/// assert_eq!(reading.concentration(Pollutant::Pm25), Some(15.5));
/// assert_eq!(reading.concentration(Pollutant::Co), None);
/// assert_eq!(reading.present().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollutantReading {
    /// PM2.5 concentration in µg/m³.
    pub pm25: Option<f64>,
    /// PM10 concentration in µg/m³.
    pub pm10: Option<f64>,
    /// NO₂ concentration in ppb.
    pub no2: Option<f64>,
    /// O₃ concentration in ppb.
    pub o3: Option<f64>,
    /// CO concentration in ppm.
    pub co: Option<f64>,
    /// SO₂ concentration in ppb.
    pub so2: Option<f64>,
    /// Time the measurement applies to.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub timestamp: OffsetDateTime,
    /// Where the reading was taken.
    pub location: Coordinates,
    /// Where the reading came from.
    pub origin: DataOrigin,
}

impl PollutantReading {
    /// Create an empty reading (no pollutants measured) for a location
    /// and time. Populate it with the chained setters.
    #[must_use]
    pub fn new(location: Coordinates, timestamp: OffsetDateTime) -> Self {
        Self {
            pm25: None,
            pm10: None,
            no2: None,
            o3: None,
            co: None,
            so2: None,
            timestamp,
            location,
            origin: DataOrigin::default(),
        }
    }

    /// Set the PM2.5 concentration (µg/m³).
    #[must_use]
    pub fn pm25(mut self, value: f64) -> Self {
        self.pm25 = Some(value);
        self
    }

    /// Set the PM10 concentration (µg/m³).
    #[must_use]
    pub fn pm10(mut self, value: f64) -> Self {
        self.pm10 = Some(value);
        self
    }

    /// Set the NO₂ concentration (ppb).
    #[must_use]
    pub fn no2(mut self, value: f64) -> Self {
        self.no2 = Some(value);
        self
    }

    /// Set the O₃ concentration (ppb).
    #[must_use]
    pub fn o3(mut self, value: f64) -> Self {
        self.o3 = Some(value);
        self
    }

    /// Set the CO concentration (ppm).
    #[must_use]
    pub fn co(mut self, value: f64) -> Self {
        self.co = Some(value);
        self
    }

    /// Set the SO₂ concentration (ppb).
    #[must_use]
    pub fn so2(mut self, value: f64) -> Self {
        self.so2 = Some(value);
        self
    }

    /// Set the provenance tag.
    #[must_use]
    pub fn origin(mut self, origin: DataOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Concentration for one pollutant, if measured.
    #[must_use]
    pub fn concentration(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
            Pollutant::Co => self.co,
            Pollutant::So2 => self.so2,
        }
    }

    /// Overwrite one pollutant's concentration (`None` clears it).
    pub fn set_concentration(&mut self, pollutant: Pollutant, value: Option<f64>) {
        match pollutant {
            Pollutant::Pm25 => self.pm25 = value,
            Pollutant::Pm10 => self.pm10 = value,
            Pollutant::No2 => self.no2 = value,
            Pollutant::O3 => self.o3 = value,
            Pollutant::Co => self.co = value,
            Pollutant::So2 => self.so2 = value,
        }
    }

    /// Iterate over the measured pollutants in [`Pollutant::ALL`] order.
    pub fn present(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL
            .iter()
            .filter_map(|&p| self.concentration(p).map(|c| (p, c)))
    }

    /// True if no pollutant was measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// AQI category, the linguistic band a final index value falls into.
///
/// The mapping from index value to category is fixed (see
/// [`AqiCategory::from_index`]); it is never configurable.
///
/// # Ordering
///
/// Categories are ordered by severity, so threshold comparisons read
/// naturally:
///
/// ```
/// use skycast_types::AqiCategory;
///
/// assert!(AqiCategory::Hazardous > AqiCategory::Moderate);
/// assert!(AqiCategory::Good < AqiCategory::UnhealthySensitive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AqiCategory {
    /// AQI 0-50.
    Good,
    /// AQI 51-100.
    Moderate,
    /// AQI 101-150.
    #[cfg_attr(feature = "serde", serde(rename = "Unhealthy for Sensitive Groups"))]
    UnhealthySensitive,
    /// AQI 151-200.
    Unhealthy,
    /// AQI 201-300.
    #[cfg_attr(feature = "serde", serde(rename = "Very Unhealthy"))]
    VeryUnhealthy,
    /// AQI 301 and above.
    Hazardous,
}

impl AqiCategory {
    /// Map a final AQI value onto its category.
    ///
    /// # Examples
    ///
    /// ```
    /// use skycast_types::AqiCategory;
    ///
    /// assert_eq!(AqiCategory::from_index(50), AqiCategory::Good);
    /// assert_eq!(AqiCategory::from_index(51), AqiCategory::Moderate);
    /// assert_eq!(AqiCategory::from_index(500), AqiCategory::Hazardous);
    /// ```
    #[must_use]
    pub fn from_index(value: u16) -> Self {
        match value {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthySensitive,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    /// EPA display color for this category, as a hex code.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#00e400",
            AqiCategory::Moderate => "#ffff00",
            AqiCategory::UnhealthySensitive => "#ff7e00",
            AqiCategory::Unhealthy => "#ff0000",
            AqiCategory::VeryUnhealthy => "#8f3f97",
            AqiCategory::Hazardous => "#7e0023",
        }
    }

    /// Short health guidance for this category.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is satisfactory",
            AqiCategory::Moderate => "Acceptable; some risk for the unusually sensitive",
            AqiCategory::UnhealthySensitive => "Sensitive groups may experience health effects",
            AqiCategory::Unhealthy => "Everyone may begin to experience health effects",
            AqiCategory::VeryUnhealthy => "Health alert: increased risk for everyone",
            AqiCategory::Hazardous => "Health warning of emergency conditions",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqiCategory::Good => write!(f, "Good"),
            AqiCategory::Moderate => write!(f, "Moderate"),
            AqiCategory::UnhealthySensitive => write!(f, "Unhealthy for Sensitive Groups"),
            AqiCategory::Unhealthy => write!(f, "Unhealthy"),
            AqiCategory::VeryUnhealthy => write!(f, "Very Unhealthy"),
            AqiCategory::Hazardous => write!(f, "Hazardous"),
        }
    }
}

/// The outcome of an AQI computation.
///
/// Invariants: `value` is the maximum sub-index over the pollutants
/// present in the input, `primary_pollutant` is the pollutant that
/// produced it, and `category` is derived from `value` via
/// [`AqiCategory::from_index`]. Use [`AqiResult::new`] to keep the last
/// invariant intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AqiResult {
    /// Final index value, 0-500.
    #[cfg_attr(feature = "serde", serde(rename = "aqi"))]
    pub value: u16,
    /// The pollutant whose sub-index produced `value`.
    pub primary_pollutant: Pollutant,
    /// Linguistic band for `value`.
    pub category: AqiCategory,
}

impl AqiResult {
    /// Build a result, deriving the category from the value.
    #[must_use]
    pub fn new(value: u16, primary_pollutant: Pollutant) -> Self {
        Self {
            value,
            primary_pollutant,
            category: AqiCategory::from_index(value),
        }
    }

    /// EPA display color for this result's category.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.category.color()
    }
}

impl fmt::Display for AqiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AQI {} ({}) driven by {}",
            self.value, self.category, self.primary_pollutant
        )
    }
}

/// One projected future reading with its derived AQI.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastPoint {
    /// Hours from the forecast base time.
    pub offset_hours: u32,
    /// The projected pollutant levels at this offset.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub reading: PollutantReading,
    /// AQI assessment of the projected reading.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub aqi: AqiResult,
}

/// An ordered short-horizon forecast.
///
/// Points are ordered by strictly increasing `offset_hours`, starting at
/// zero and ending below `horizon_hours`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastSeries {
    /// Location the forecast applies to.
    pub location: Coordinates,
    /// Total forward span covered, in hours.
    pub horizon_hours: u32,
    /// Hours between consecutive points.
    pub step_hours: u32,
    /// Base time the offsets are relative to.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub generated_at: OffsetDateTime,
    /// The predictions, ordered by increasing offset.
    pub points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Number of forecast points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in offset order.
    pub fn iter(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.points.iter()
    }

    /// The point with the highest AQI, if any.
    #[must_use]
    pub fn peak(&self) -> Option<&ForecastPoint> {
        self.points.iter().max_by_key(|p| p.aqi.value)
    }
}
