//! EPA Breakpoint Tables and Piecewise-Linear Index Lookup
//!
//! ## Background
//!
//! The US EPA defines the Air Quality Index as a piecewise-linear mapping
//! from pollutant concentration to a 0-500 score. Each pollutant gets its own
//! table of rows `[conc_low, conc_high] -> [index_low, index_high]`; within a
//! row the index is linearly interpolated:
//!
//! ```text
//! index = (index_high - index_low) / (conc_high - conc_low)
//!         * (conc - conc_low) + index_low
//! ```
//!
//! rounded to the nearest integer.
//!
//! ## Table Design
//!
//! Tables are `const` and borrowed for `'static` - no allocation, no startup
//! cost, and the same data on a dashboard backend or an edge node. Contents
//! follow the EPA breakpoints for the criteria pollutants; HCHO, SO2 and the
//! aerosol index use simplified linear 0-100 tables matching the upstream
//! TEMPO/OpenAQ feeds, which report those channels on a 0-100 scale.
//!
//! ## Edge Semantics
//!
//! The lookup is a total function over `f32`:
//!
//! - Concentrations above the last row saturate to [`AQI_MAX`] rather than
//!   erroring. A sensor spike renders as "hazardous", not as a failure.
//! - EPA tables quantize bounds, leaving sub-integer gaps between rows
//!   (e.g. NO2 rows end at 53 ppb and resume at 54 ppb). A concentration in
//!   such a gap resolves to the next row clamped to its lower bound, which
//!   keeps the mapping monotone.
//! - Negative concentrations clamp into the first row's lower bound. Callers
//!   are expected not to pass them; this is the documented precondition, not
//!   a recoverable error.
//! - NaN fails every range test and saturates to [`AQI_MAX`].

use libm::roundf;

use crate::constants::AQI_MAX;
use crate::pollutant::Pollutant;

/// One row of a breakpoint table
///
/// Maps the concentration range `[conc_low, conc_high]` linearly onto the
/// index range `[index_low, index_high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Lower concentration bound (inclusive)
    pub conc_low: f32,
    /// Upper concentration bound (inclusive)
    pub conc_high: f32,
    /// Index value at `conc_low`
    pub index_low: u16,
    /// Index value at `conc_high`
    pub index_high: u16,
}

impl Breakpoint {
    /// Build a row; used by the `const` table definitions below
    pub const fn new(conc_low: f32, conc_high: f32, index_low: u16, index_high: u16) -> Self {
        Self { conc_low, conc_high, index_low, index_high }
    }

    /// Interpolate the index for a concentration inside this row
    fn interpolate(&self, concentration: f32) -> u16 {
        let slope = (self.index_high - self.index_low) as f32 / (self.conc_high - self.conc_low);
        let index = roundf(slope * (concentration - self.conc_low) + self.index_low as f32);
        index as u16
    }
}

/// Ordered, immutable breakpoint table for one pollutant
///
/// Rows are ordered by ascending concentration and do not overlap.
/// Tables are defined once at compile time; see [`BreakpointTable::for_pollutant`].
#[derive(Debug, Clone, Copy)]
pub struct BreakpointTable {
    rows: &'static [Breakpoint],
}

impl BreakpointTable {
    /// Wrap a static row slice as a table
    pub const fn new(rows: &'static [Breakpoint]) -> Self {
        Self { rows }
    }

    /// Rows of this table, in ascending concentration order
    pub const fn rows(&self) -> &'static [Breakpoint] {
        self.rows
    }

    /// The registered table for a pollutant
    pub const fn for_pollutant(pollutant: Pollutant) -> &'static BreakpointTable {
        match pollutant {
            Pollutant::No2 => &NO2,
            Pollutant::O3 => &O3,
            Pollutant::Pm25 => &PM25,
            Pollutant::Pm10 => &PM10,
            Pollutant::Hcho => &HCHO,
            Pollutant::So2 => &SO2,
            Pollutant::Aerosols => &AEROSOLS,
        }
    }

    /// Map a concentration into the 0-500 index
    ///
    /// Scans rows in ascending order for the first whose upper bound admits
    /// the concentration, then interpolates linearly within it. Total over
    /// all of `f32`; see the module docs for the edge semantics.
    pub fn index_for(&self, concentration: f32) -> u16 {
        for row in self.rows {
            if concentration <= row.conc_high {
                // Gap between quantized rows (or a negative input): clamp
                // into the row so the mapping stays monotone.
                let clamped = if concentration < row.conc_low {
                    row.conc_low
                } else {
                    concentration
                };
                return row.interpolate(clamped);
            }
        }
        // Above every row (or NaN): saturate, never error.
        AQI_MAX
    }

    /// Check the ordering invariant: rows ascend in concentration without
    /// overlapping, and index ranges never decrease.
    ///
    /// Tables are static data, so this is a test-time guard rather than a
    /// runtime check.
    pub fn is_well_formed(&self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let mut prev: Option<&Breakpoint> = None;
        for row in self.rows {
            if !(row.conc_low < row.conc_high) || row.index_low > row.index_high {
                return false;
            }
            if let Some(p) = prev {
                if row.conc_low <= p.conc_high || row.index_low < p.index_high {
                    return false;
                }
            }
            prev = Some(row);
        }
        true
    }
}

/// Nitrogen dioxide, ppb (EPA 1-hour breakpoints)
pub static NO2: BreakpointTable = BreakpointTable::new(&[
    Breakpoint::new(0.0, 53.0, 0, 50),
    Breakpoint::new(54.0, 100.0, 51, 100),
    Breakpoint::new(101.0, 360.0, 101, 150),
    Breakpoint::new(361.0, 649.0, 151, 200),
    Breakpoint::new(650.0, 1249.0, 201, 300),
    Breakpoint::new(1250.0, 2049.0, 301, 500),
]);

/// Ground-level ozone, ppb (EPA 8-hour breakpoints)
pub static O3: BreakpointTable = BreakpointTable::new(&[
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 70.0, 51, 100),
    Breakpoint::new(71.0, 85.0, 101, 150),
    Breakpoint::new(86.0, 105.0, 151, 200),
    Breakpoint::new(106.0, 200.0, 201, 300),
]);

/// Fine particulate matter, µg/m³ (EPA 24-hour breakpoints)
pub static PM25: BreakpointTable = BreakpointTable::new(&[
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(12.1, 35.4, 51, 100),
    Breakpoint::new(35.5, 55.4, 101, 150),
    Breakpoint::new(55.5, 150.4, 151, 200),
    Breakpoint::new(150.5, 250.4, 201, 300),
    Breakpoint::new(250.5, 500.0, 301, 500),
]);

/// Coarse particulate matter, µg/m³ (EPA 24-hour breakpoints)
pub static PM10: BreakpointTable = BreakpointTable::new(&[
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 154.0, 51, 100),
    Breakpoint::new(155.0, 254.0, 101, 150),
    Breakpoint::new(255.0, 354.0, 151, 200),
    Breakpoint::new(355.0, 424.0, 201, 300),
    Breakpoint::new(425.0, 604.0, 301, 500),
]);

/// Formaldehyde, ppb (simplified linear scale from the TEMPO feed)
pub static HCHO: BreakpointTable = BreakpointTable::new(&[
    Breakpoint::new(0.0, 100.0, 0, 100),
]);

/// Sulfur dioxide, ppb (simplified linear scale)
pub static SO2: BreakpointTable = BreakpointTable::new(&[
    Breakpoint::new(0.0, 100.0, 0, 100),
]);

/// Aerosol optical index, dimensionless (0-1 feed scale)
pub static AEROSOLS: BreakpointTable = BreakpointTable::new(&[
    Breakpoint::new(0.0, 1.0, 0, 100),
]);

/// Fallback table for unregistered identifiers: linear 0-100
///
/// Display-oriented callers prefer a degraded index over a hard failure when
/// a feed introduces a channel we have no EPA table for.
pub static GENERIC: BreakpointTable = BreakpointTable::new(&[
    Breakpoint::new(0.0, 100.0, 0, 100),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_boundaries_are_exact() {
        for pollutant in Pollutant::ALL {
            let table = BreakpointTable::for_pollutant(pollutant);
            for row in table.rows() {
                assert_eq!(
                    table.index_for(row.conc_low),
                    row.index_low,
                    "{pollutant} lower bound {}",
                    row.conc_low
                );
                assert_eq!(
                    table.index_for(row.conc_high),
                    row.index_high,
                    "{pollutant} upper bound {}",
                    row.conc_high
                );
            }
        }
    }

    #[test]
    fn all_tables_well_formed() {
        for pollutant in Pollutant::ALL {
            assert!(
                BreakpointTable::for_pollutant(pollutant).is_well_formed(),
                "{pollutant} table violates ordering invariant"
            );
        }
        assert!(GENERIC.is_well_formed());
    }

    #[test]
    fn saturates_above_last_row() {
        assert_eq!(PM25.index_for(1000.0), AQI_MAX);
        assert_eq!(O3.index_for(201.0), AQI_MAX);
        assert_eq!(AEROSOLS.index_for(2.5), AQI_MAX);
    }

    #[test]
    fn quantization_gap_resolves_to_next_row() {
        // NO2 rows end at 53 and resume at 54
        assert_eq!(NO2.index_for(53.0), 50);
        assert_eq!(NO2.index_for(53.5), 51);
        assert_eq!(NO2.index_for(54.0), 51);
    }

    #[test]
    fn negative_clamps_to_first_row() {
        assert_eq!(PM25.index_for(-1.0), 0);
    }

    #[test]
    fn nan_saturates() {
        assert_eq!(PM25.index_for(f32::NAN), AQI_MAX);
    }

    #[test]
    fn interpolation_midpoint() {
        // PM2.5 first row maps [0, 12] onto [0, 50]: 6 µg/m³ -> 25
        assert_eq!(PM25.index_for(6.0), 25);
        // NO2 top row: 2049 ppb is the EPA ceiling
        assert_eq!(NO2.index_for(2049.0), 500);
    }
}
