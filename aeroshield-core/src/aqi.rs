//! AQI Computation and Classification
//!
//! The two operations the rest of AeroShield builds on:
//!
//! - [`compute_index`]: (pollutant, concentration) -> 0-500 index, via the
//!   pollutant's breakpoint table.
//! - [`classify`]: index -> one of the six EPA level bands.
//!
//! Both are pure and total: no I/O, no state, identical inputs give
//! identical outputs from any thread.

use core::fmt;
use core::str::FromStr;

use crate::breakpoints::{BreakpointTable, GENERIC};
use crate::constants::{
    AQI_GOOD_MAX, AQI_MODERATE_MAX, AQI_UNHEALTHY_MAX, AQI_UNHEALTHY_SENSITIVE_MAX,
    AQI_VERY_UNHEALTHY_MAX,
};
use crate::pollutant::Pollutant;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Compute the 0-500 air quality index for a pollutant concentration
///
/// Concentration is in the pollutant's table unit ([`Pollutant::unit`]):
/// ppb for gases, µg/m³ for particulates. Values above the table saturate
/// to 500; negative values are a precondition violation and clamp to the
/// bottom of the scale rather than panicking.
pub fn compute_index(pollutant: Pollutant, concentration: f32) -> u16 {
    BreakpointTable::for_pollutant(pollutant).index_for(concentration)
}

/// Permissive, string-keyed variant of [`compute_index`]
///
/// Resolves the identifier against the registered pollutants; unknown
/// identifiers fall back to the generic linear 0-100 table instead of
/// failing, so a feed that grows a new channel degrades instead of breaking
/// the display. Callers that need a hard error should parse the identifier
/// with [`Pollutant::from_str`] first.
pub fn index_for_name(name: &str, concentration: f32) -> u16 {
    match Pollutant::from_str(name) {
        Ok(pollutant) => compute_index(pollutant, concentration),
        Err(_) => {
            log_warn!("No breakpoint table for {:?}, using generic 0-100 scale", name);
            GENERIC.index_for(concentration)
        }
    }
}

/// EPA air quality level, derived from the index by fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiLevel {
    /// 0-50: little or no risk
    Good,
    /// 51-100: acceptable for most
    Moderate,
    /// 101-150: sensitive groups may experience effects
    UnhealthySensitive,
    /// 151-200: everyone may begin to experience effects
    Unhealthy,
    /// 201-300: health warnings of emergency conditions
    VeryUnhealthy,
    /// 301-500: health alert, everyone affected
    Hazardous,
}

impl AqiLevel {
    /// Classify an index value into its level band
    pub const fn classify(index: u16) -> Self {
        if index <= AQI_GOOD_MAX {
            AqiLevel::Good
        } else if index <= AQI_MODERATE_MAX {
            AqiLevel::Moderate
        } else if index <= AQI_UNHEALTHY_SENSITIVE_MAX {
            AqiLevel::UnhealthySensitive
        } else if index <= AQI_UNHEALTHY_MAX {
            AqiLevel::Unhealthy
        } else if index <= AQI_VERY_UNHEALTHY_MAX {
            AqiLevel::VeryUnhealthy
        } else {
            AqiLevel::Hazardous
        }
    }

    /// Wire label, matching the dashboard's serialized form
    pub const fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "good",
            AqiLevel::Moderate => "moderate",
            AqiLevel::UnhealthySensitive => "unhealthy-sensitive",
            AqiLevel::Unhealthy => "unhealthy",
            AqiLevel::VeryUnhealthy => "very-unhealthy",
            AqiLevel::Hazardous => "hazardous",
        }
    }

    /// Conventional EPA display color for this band
    pub const fn color(&self) -> &'static str {
        match self {
            AqiLevel::Good => "green",
            AqiLevel::Moderate => "yellow",
            AqiLevel::UnhealthySensitive => "orange",
            AqiLevel::Unhealthy => "red",
            AqiLevel::VeryUnhealthy => "purple",
            AqiLevel::Hazardous => "maroon",
        }
    }

    /// Short health guidance line for dashboards and alerts
    pub const fn guidance(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Air quality is satisfactory.",
            AqiLevel::Moderate => "Unusually sensitive people should consider reducing prolonged outdoor exertion.",
            AqiLevel::UnhealthySensitive => "Sensitive groups should reduce prolonged outdoor exertion.",
            AqiLevel::Unhealthy => "Everyone should reduce prolonged outdoor exertion.",
            AqiLevel::VeryUnhealthy => "Avoid outdoor exertion; sensitive groups should remain indoors.",
            AqiLevel::Hazardous => "Everyone should avoid all outdoor activity.",
        }
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-function form of [`AqiLevel::classify`]
pub const fn classify(index: u16) -> AqiLevel {
    AqiLevel::classify(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_band_boundaries() {
        assert_eq!(classify(0), AqiLevel::Good);
        assert_eq!(classify(50), AqiLevel::Good);
        assert_eq!(classify(51), AqiLevel::Moderate);
        assert_eq!(classify(100), AqiLevel::Moderate);
        assert_eq!(classify(101), AqiLevel::UnhealthySensitive);
        assert_eq!(classify(150), AqiLevel::UnhealthySensitive);
        assert_eq!(classify(151), AqiLevel::Unhealthy);
        assert_eq!(classify(200), AqiLevel::Unhealthy);
        assert_eq!(classify(201), AqiLevel::VeryUnhealthy);
        assert_eq!(classify(300), AqiLevel::VeryUnhealthy);
        assert_eq!(classify(301), AqiLevel::Hazardous);
        assert_eq!(classify(500), AqiLevel::Hazardous);
    }

    #[test]
    fn pm25_first_bracket_boundary() {
        assert_eq!(compute_index(Pollutant::Pm25, 12.0), 50);
        assert_eq!(classify(50), AqiLevel::Good);
    }

    #[test]
    fn no2_table_ceiling() {
        assert_eq!(compute_index(Pollutant::No2, 2049.0), 500);
        assert_eq!(classify(500), AqiLevel::Hazardous);
    }

    #[test]
    fn unknown_name_uses_generic_scale() {
        assert_eq!(index_for_name("CO", 50.0), 50);
        assert_eq!(index_for_name("CO", 250.0), 500);
    }

    #[test]
    fn known_name_uses_registered_table() {
        assert_eq!(index_for_name("PM25", 12.0), 50);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(AqiLevel::Good < AqiLevel::Moderate);
        assert!(AqiLevel::VeryUnhealthy < AqiLevel::Hazardous);
    }

    #[test]
    fn labels_round_trip_display() {
        assert_eq!(AqiLevel::UnhealthySensitive.to_string(), "unhealthy-sensitive");
        assert_eq!(AqiLevel::Hazardous.color(), "maroon");
    }
}
