//! Basic AQI Computation Example
//!
//! This example demonstrates the simplest use case of AeroShield:
//! converting raw pollutant concentrations into the 0-500 AQI scale
//! and the six EPA level bands.
//!
//! ## What You'll Learn
//!
//! - Computing an index from a (pollutant, concentration) pair
//! - Classifying an index into a level band
//! - The permissive string-keyed lookup for raw feed data
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_aqi
//! ```

use aeroshield_core::{classify, compute_index, index_for_name, Pollutant};

fn main() {
    println!("AeroShield Basic AQI Example");
    println!("============================\n");

    // Typical readings from a monitoring site
    let readings = [
        (Pollutant::Pm25, 8.4),
        (Pollutant::Pm25, 42.0),
        (Pollutant::No2, 75.0),
        (Pollutant::O3, 98.0),
        (Pollutant::Pm10, 420.0),
    ];

    println!("Typed lookup:");
    for (pollutant, concentration) in readings {
        let index = compute_index(pollutant, concentration);
        let level = classify(index);
        println!(
            "  {:>4} {:6.1} {:<6} -> AQI {:3} ({}, {})",
            pollutant.as_str(),
            concentration,
            pollutant.unit(),
            index,
            level,
            level.color(),
        );
    }
    println!();

    // Raw feed identifiers: known names hit the EPA tables, unknown ones
    // degrade to a generic linear 0-100 scale instead of failing
    println!("String-keyed lookup:");
    for (name, concentration) in [("PM25", 42.0), ("CO", 42.0)] {
        println!(
            "  {:>4} {:6.1} -> AQI {:3}",
            name,
            concentration,
            index_for_name(name, concentration)
        );
    }
    println!();

    // Saturation: a spike far above the table renders as hazardous
    let spike = compute_index(Pollutant::Pm25, 1200.0);
    println!("PM2.5 spike at 1200 µg/m³ -> AQI {} ({})", spike, classify(spike));
    println!("Guidance: {}", classify(spike).guidance());
}
