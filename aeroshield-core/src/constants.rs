//! Index Scale Constants and Level Thresholds
//!
//! Centralized numeric constants for the AQI scale. The thresholds follow
//! the US EPA index bands; every classification in the crate derives from
//! these values rather than repeating magic numbers.

// ===== INDEX SCALE =====

/// Ceiling of the AQI scale.
///
/// Concentrations above every breakpoint row saturate here; the index
/// never exceeds this value.
pub const AQI_MAX: u16 = 500;

// ===== LEVEL THRESHOLDS (inclusive upper bounds) =====

/// Upper bound of the "good" band (0-50).
///
/// Air quality poses little or no risk.
pub const AQI_GOOD_MAX: u16 = 50;

/// Upper bound of the "moderate" band (51-100).
///
/// Acceptable, though unusually sensitive individuals may notice effects.
pub const AQI_MODERATE_MAX: u16 = 100;

/// Upper bound of the "unhealthy for sensitive groups" band (101-150).
pub const AQI_UNHEALTHY_SENSITIVE_MAX: u16 = 150;

/// Upper bound of the "unhealthy" band (151-200).
pub const AQI_UNHEALTHY_MAX: u16 = 200;

/// Upper bound of the "very unhealthy" band (201-300).
///
/// Everything above this is "hazardous" up to [`AQI_MAX`].
pub const AQI_VERY_UNHEALTHY_MAX: u16 = 300;
