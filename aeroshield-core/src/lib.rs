//! Core AQI engine for AeroShield
//!
//! Maps pollutant concentrations onto the standardized 0-500 air quality
//! index using US EPA breakpoint tables, and classifies indices into the
//! six level bands. Pure functions over static tables: no I/O, no state,
//! safe from any thread.
//!
//! Designed to run anywhere from a dashboard backend to an edge sensor
//! node: `no_std` without the default `std` feature, no heap allocation.
//!
//! ```
//! use aeroshield_core::{compute_index, classify, AqiLevel, Pollutant};
//!
//! let index = compute_index(Pollutant::Pm25, 12.0);
//! assert_eq!(index, 50);
//! assert_eq!(classify(index), AqiLevel::Good);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod aqi;
pub mod breakpoints;
pub mod constants;
pub mod errors;
pub mod pollutant;
pub mod summary;

// Public API
pub use aqi::{classify, compute_index, index_for_name, AqiLevel};
pub use breakpoints::{Breakpoint, BreakpointTable};
pub use errors::{AqiError, AqiResult};
pub use pollutant::Pollutant;
pub use summary::{AirQualitySummary, PollutantIndex};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
