//! EPA breakpoint tables for AQI sub-index computation.
//!
//! Each pollutant has a fixed, monotonically increasing table mapping
//! concentration brackets onto AQI brackets. These are domain constants
//! published by the EPA, not anything computed; values may be checked
//! against the calculator at
//! <https://www.airnow.gov/aqi/aqi-calculator-concentration/>.
//!
//! Tables are expressed in each pollutant's native reporting unit:
//! µg/m³ for particulates, ppb for NO₂/O₃/SO₂, ppm for CO.

use skycast_types::Pollutant;

/// One row of a breakpoint table: a concentration bracket and the AQI
/// bracket it maps onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Lower concentration bound (inclusive).
    pub concentration_low: f64,
    /// Upper concentration bound (inclusive).
    pub concentration_high: f64,
    /// AQI at the lower bound.
    pub aqi_low: u16,
    /// AQI at the upper bound.
    pub aqi_high: u16,
}

/// Highest reportable index value. Concentrations beyond the top bracket
/// clamp here rather than extrapolating.
pub const MAX_AQI: u16 = 500;

const fn row(c_low: f64, c_high: f64, aqi_low: u16, aqi_high: u16) -> Breakpoint {
    Breakpoint {
        concentration_low: c_low,
        concentration_high: c_high,
        aqi_low,
        aqi_high,
    }
}

/// PM2.5, 24-hour average, µg/m³.
const PM25: [Breakpoint; 6] = [
    row(0.0, 12.0, 0, 50),
    row(12.1, 35.4, 51, 100),
    row(35.5, 55.4, 101, 150),
    row(55.5, 150.4, 151, 200),
    row(150.5, 250.4, 201, 300),
    row(250.5, 500.4, 301, 500),
];

/// PM10, 24-hour average, µg/m³.
const PM10: [Breakpoint; 6] = [
    row(0.0, 54.0, 0, 50),
    row(55.0, 154.0, 51, 100),
    row(155.0, 254.0, 101, 150),
    row(255.0, 354.0, 151, 200),
    row(355.0, 424.0, 201, 300),
    row(425.0, 604.0, 301, 500),
];

/// NO₂, 1-hour average, ppb.
const NO2: [Breakpoint; 6] = [
    row(0.0, 53.0, 0, 50),
    row(54.0, 100.0, 51, 100),
    row(101.0, 360.0, 101, 150),
    row(361.0, 649.0, 151, 200),
    row(650.0, 1249.0, 201, 300),
    row(1250.0, 2049.0, 301, 500),
];

/// O₃, 8-hour average, ppb. The top bracket extends into the 1-hour
/// range the EPA uses for very high ozone episodes.
const O3: [Breakpoint; 6] = [
    row(0.0, 54.0, 0, 50),
    row(55.0, 70.0, 51, 100),
    row(71.0, 85.0, 101, 150),
    row(86.0, 105.0, 151, 200),
    row(106.0, 200.0, 201, 300),
    row(201.0, 400.0, 301, 500),
];

/// CO, 8-hour average, ppm.
const CO: [Breakpoint; 6] = [
    row(0.0, 4.4, 0, 50),
    row(4.5, 9.4, 51, 100),
    row(9.5, 12.4, 101, 150),
    row(12.5, 15.4, 151, 200),
    row(15.5, 30.4, 201, 300),
    row(30.5, 50.4, 301, 500),
];

/// SO₂, 1-hour average, ppb.
const SO2: [Breakpoint; 6] = [
    row(0.0, 35.0, 0, 50),
    row(36.0, 75.0, 51, 100),
    row(76.0, 185.0, 101, 150),
    row(186.0, 304.0, 151, 200),
    row(305.0, 604.0, 201, 300),
    row(605.0, 1004.0, 301, 500),
];

/// The breakpoint table for a pollutant.
#[must_use]
pub fn table(pollutant: Pollutant) -> &'static [Breakpoint] {
    match pollutant {
        Pollutant::Pm25 => &PM25,
        Pollutant::Pm10 => &PM10,
        Pollutant::No2 => &NO2,
        Pollutant::O3 => &O3,
        Pollutant::Co => &CO,
        Pollutant::So2 => &SO2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pollutant_has_a_table() {
        for pollutant in Pollutant::ALL {
            assert!(!table(pollutant).is_empty(), "{pollutant} has no table");
        }
    }

    #[test]
    fn test_tables_are_monotonically_increasing() {
        for pollutant in Pollutant::ALL {
            let rows = table(pollutant);
            for pair in rows.windows(2) {
                assert!(
                    pair[0].concentration_high < pair[1].concentration_low,
                    "{pollutant}: concentration brackets overlap"
                );
                assert_eq!(
                    pair[0].aqi_high + 1,
                    pair[1].aqi_low,
                    "{pollutant}: AQI brackets must be contiguous"
                );
            }
        }
    }

    #[test]
    fn test_tables_start_at_zero_and_reach_max() {
        for pollutant in Pollutant::ALL {
            let rows = table(pollutant);
            assert_eq!(rows[0].concentration_low, 0.0);
            assert_eq!(rows[0].aqi_low, 0);
            assert_eq!(rows.last().unwrap().aqi_high, MAX_AQI);
        }
    }

    #[test]
    fn test_rows_map_valid_brackets() {
        for pollutant in Pollutant::ALL {
            for row in table(pollutant) {
                assert!(row.concentration_low < row.concentration_high);
                assert!(row.aqi_low < row.aqi_high);
            }
        }
    }
}
