//! Site Summary Example
//!
//! Builds the dashboard headline for a monitoring site: per-pollutant
//! indices, the overall (worst) index, and the dominant pollutant.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_site_summary
//! ```

use aeroshield_core::{AirQualitySummary, Pollutant};

fn main() {
    println!("AeroShield Site Summary Example");
    println!("===============================\n");

    // One reading per channel, as a station feed would deliver them
    let readings = [
        (Pollutant::No2, 38.0),
        (Pollutant::O3, 61.0),
        (Pollutant::Pm25, 47.5),
        (Pollutant::Pm10, 80.0),
        (Pollutant::Hcho, 6.2),
        (Pollutant::So2, 3.1),
        (Pollutant::Aerosols, 0.4),
    ];

    let summary = AirQualitySummary::from_readings(&readings);

    println!("Per-pollutant indices:");
    for entry in summary.per_pollutant() {
        println!(
            "  {:>8} {:6.1} {:<6} -> AQI {:3} ({})",
            entry.pollutant.as_str(),
            entry.concentration,
            entry.pollutant.unit(),
            entry.index,
            entry.level,
        );
    }
    println!();

    println!("Overall AQI: {} ({})", summary.overall_index(), summary.level());
    if let Some(dominant) = summary.dominant() {
        println!("Dominant pollutant: {}", dominant.display_name());
    }
    println!("Guidance: {}", summary.level().guidance());
}
