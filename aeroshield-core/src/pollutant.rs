//! Pollutant identifiers and measurement metadata
//!
//! The seven substances AeroShield tracks, matching the upstream data
//! sources (TEMPO satellite columns, OpenAQ station feeds):
//!
//! - Gases reported in ppb: NO2, O3, HCHO, SO2
//! - Particulate matter reported in µg/m³: PM2.5, PM10
//! - Aerosols reported as a dimensionless optical index
//!
//! Identifier strings are the canonical API keys ("NO2", "PM25", ...) used
//! across the upstream payloads; parsing is case-sensitive on purpose so a
//! malformed feed is caught instead of silently matched.

use core::fmt;
use core::str::FromStr;

use crate::errors::AqiError;

/// A measured atmospheric substance with a registered breakpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pollutant {
    /// Nitrogen dioxide (ppb)
    #[cfg_attr(feature = "serde", serde(rename = "NO2"))]
    No2,
    /// Ground-level ozone (ppb)
    #[cfg_attr(feature = "serde", serde(rename = "O3"))]
    O3,
    /// Fine particulate matter, diameter < 2.5 µm (µg/m³)
    #[cfg_attr(feature = "serde", serde(rename = "PM25"))]
    Pm25,
    /// Coarse particulate matter, diameter < 10 µm (µg/m³)
    #[cfg_attr(feature = "serde", serde(rename = "PM10"))]
    Pm10,
    /// Formaldehyde (ppb)
    #[cfg_attr(feature = "serde", serde(rename = "HCHO"))]
    Hcho,
    /// Sulfur dioxide (ppb)
    #[cfg_attr(feature = "serde", serde(rename = "SO2"))]
    So2,
    /// Aerosol optical index (dimensionless)
    #[cfg_attr(feature = "serde", serde(rename = "Aerosols"))]
    Aerosols,
}

impl Pollutant {
    /// All registered pollutants, in canonical order
    pub const ALL: [Pollutant; 7] = [
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Hcho,
        Pollutant::So2,
        Pollutant::Aerosols,
    ];

    /// Canonical API identifier, as used by the upstream feeds
    pub const fn as_str(&self) -> &'static str {
        match self {
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::Pm25 => "PM25",
            Pollutant::Pm10 => "PM10",
            Pollutant::Hcho => "HCHO",
            Pollutant::So2 => "SO2",
            Pollutant::Aerosols => "Aerosols",
        }
    }

    /// Human-readable name for dashboards and reports
    pub const fn display_name(&self) -> &'static str {
        match self {
            Pollutant::No2 => "Nitrogen Dioxide",
            Pollutant::O3 => "Ozone",
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Hcho => "Formaldehyde",
            Pollutant::So2 => "Sulfur Dioxide",
            Pollutant::Aerosols => "Aerosols",
        }
    }

    /// Physical unit of the concentration values this pollutant's
    /// breakpoint table is defined over
    pub const fn unit(&self) -> &'static str {
        match self {
            Pollutant::No2 | Pollutant::O3 | Pollutant::Hcho | Pollutant::So2 => "ppb",
            Pollutant::Pm25 | Pollutant::Pm10 => "µg/m³",
            Pollutant::Aerosols => "index",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pollutant {
    type Err = AqiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO2" => Ok(Pollutant::No2),
            "O3" => Ok(Pollutant::O3),
            "PM25" => Ok(Pollutant::Pm25),
            "PM10" => Ok(Pollutant::Pm10),
            "HCHO" => Ok(Pollutant::Hcho),
            "SO2" => Ok(Pollutant::So2),
            "Aerosols" => Ok(Pollutant::Aerosols),
            _ => Err(AqiError::UnknownPollutant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_round_trip() {
        for pollutant in Pollutant::ALL {
            assert_eq!(pollutant.as_str().parse::<Pollutant>(), Ok(pollutant));
        }
    }

    #[test]
    fn unknown_identifier_rejected() {
        assert_eq!("CO".parse::<Pollutant>(), Err(AqiError::UnknownPollutant));
        // Case-sensitive on purpose
        assert_eq!("no2".parse::<Pollutant>(), Err(AqiError::UnknownPollutant));
        assert_eq!("".parse::<Pollutant>(), Err(AqiError::UnknownPollutant));
    }

    #[test]
    fn units_match_table_definitions() {
        assert_eq!(Pollutant::No2.unit(), "ppb");
        assert_eq!(Pollutant::Pm25.unit(), "µg/m³");
        assert_eq!(Pollutant::Aerosols.unit(), "index");
    }
}
