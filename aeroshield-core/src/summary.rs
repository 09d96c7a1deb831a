//! Multi-Pollutant Site Summary
//!
//! A monitoring site reports several pollutant concentrations at once; the
//! dashboard headline is the worst of the per-pollutant indices together
//! with the pollutant that produced it. This module assembles that rollup
//! without allocating: per-pollutant results go into a fixed-capacity
//! `heapless::Vec` sized for the registered pollutant set.
//!
//! Duplicate readings for the same pollutant keep whichever produces the
//! higher index, so a summary never understates a station that reported a
//! channel twice.

use heapless::Vec;

use crate::aqi::{compute_index, AqiLevel};
use crate::pollutant::Pollutant;

/// Capacity of the per-pollutant result vector; one slot per registered
/// pollutant plus headroom for a future channel.
const SUMMARY_CAPACITY: usize = 8;

/// Per-pollutant result within a summary
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PollutantIndex {
    /// The measured pollutant
    pub pollutant: Pollutant,
    /// Raw concentration, in the pollutant's table unit
    pub concentration: f32,
    /// Computed 0-500 index
    pub index: u16,
    /// Level band for this pollutant alone
    pub level: AqiLevel,
}

/// Rollup of one site's readings: per-pollutant indices plus the headline
#[derive(Debug, Clone, Default)]
pub struct AirQualitySummary {
    indices: Vec<PollutantIndex, SUMMARY_CAPACITY>,
    overall: u16,
    dominant: Option<Pollutant>,
}

impl AirQualitySummary {
    /// Build a summary from (pollutant, concentration) readings
    ///
    /// An empty slice yields an empty summary: overall index 0, level
    /// "good", no dominant pollutant.
    pub fn from_readings(readings: &[(Pollutant, f32)]) -> Self {
        let mut summary = Self::default();
        for &(pollutant, concentration) in readings {
            summary.add_reading(pollutant, concentration);
        }
        summary
    }

    /// Fold one reading into the summary
    pub fn add_reading(&mut self, pollutant: Pollutant, concentration: f32) {
        let index = compute_index(pollutant, concentration);
        let entry = PollutantIndex {
            pollutant,
            concentration,
            index,
            level: AqiLevel::classify(index),
        };

        match self.indices.iter_mut().find(|e| e.pollutant == pollutant) {
            Some(existing) => {
                if entry.index > existing.index {
                    *existing = entry;
                }
            }
            // Capacity exceeds the registered pollutant count; after the
            // dedup above this push cannot fail.
            None => {
                let _ = self.indices.push(entry);
            }
        }

        if index > self.overall || self.dominant.is_none() {
            self.overall = index;
            self.dominant = Some(pollutant);
        }
    }

    /// Headline index: the maximum over all per-pollutant indices
    pub fn overall_index(&self) -> u16 {
        self.overall
    }

    /// Level band of the headline index
    pub fn level(&self) -> AqiLevel {
        AqiLevel::classify(self.overall)
    }

    /// The pollutant driving the headline index, if any readings were folded
    pub fn dominant(&self) -> Option<Pollutant> {
        self.dominant
    }

    /// Per-pollutant results, in first-seen order
    pub fn per_pollutant(&self) -> &[PollutantIndex] {
        &self.indices
    }

    /// Whether any readings have been folded in
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary() {
        let summary = AirQualitySummary::from_readings(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.overall_index(), 0);
        assert_eq!(summary.level(), AqiLevel::Good);
        assert_eq!(summary.dominant(), None);
    }

    #[test]
    fn dominant_is_the_worst_pollutant() {
        let summary = AirQualitySummary::from_readings(&[
            (Pollutant::Pm25, 10.0),  // index 42
            (Pollutant::O3, 75.0),    // index 115
            (Pollutant::No2, 30.0),   // index 28
        ]);
        assert_eq!(summary.dominant(), Some(Pollutant::O3));
        assert_eq!(summary.overall_index(), 115);
        assert_eq!(summary.level(), AqiLevel::UnhealthySensitive);
        assert_eq!(summary.per_pollutant().len(), 3);
    }

    #[test]
    fn single_reading_is_dominant() {
        let summary = AirQualitySummary::from_readings(&[(Pollutant::Pm25, 5.0)]);
        assert_eq!(summary.dominant(), Some(Pollutant::Pm25));
        assert_eq!(summary.overall_index(), 21);
    }

    #[test]
    fn duplicate_readings_keep_the_worse_one() {
        let summary = AirQualitySummary::from_readings(&[
            (Pollutant::Pm25, 5.0),
            (Pollutant::Pm25, 40.0),
        ]);
        assert_eq!(summary.per_pollutant().len(), 1);
        assert_eq!(summary.per_pollutant()[0].concentration, 40.0);
        assert_eq!(summary.dominant(), Some(Pollutant::Pm25));
    }

    #[test]
    fn all_pollutants_fit() {
        let readings = Pollutant::ALL.map(|p| (p, 10.0));
        let summary = AirQualitySummary::from_readings(&readings);
        assert_eq!(summary.per_pollutant().len(), Pollutant::ALL.len());
    }
}
