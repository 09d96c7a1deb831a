//! Error Types for AQI Computation
//!
//! ## Design Philosophy
//!
//! AeroShield's core runs on anything from a dashboard backend to an edge
//! sensor node, so errors follow the same rules as the rest of the crate:
//!
//! 1. **Small Size**: one discriminant byte, no payload that would grow the
//!    enum past a register.
//!
//! 2. **No Heap Allocation**: no String, no captured input text. The caller
//!    already holds the identifier that failed to parse.
//!
//! 3. **Copy Semantics**: errors are returned from hot lookup paths and may
//!    be stored in fixed-capacity queues.
//!
//! ## Error Surface
//!
//! The numeric paths (`compute_index`, `classify`, summaries) are total
//! functions and never fail. The only fallible operation in the crate is
//! resolving a pollutant identifier string to a registered breakpoint table,
//! which is why the taxonomy is a single variant. Display-oriented callers
//! that prefer degraded output over an error should use
//! [`index_for_name`](crate::aqi::index_for_name), which substitutes the
//! generic table instead of failing.

use thiserror_no_std::Error;

/// Result type for fallible AQI operations
pub type AqiResult<T> = Result<T, AqiError>;

/// AQI computation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiError {
    /// Pollutant identifier has no registered breakpoint table
    #[error("Unknown pollutant identifier")]
    UnknownPollutant,
}

#[cfg(feature = "defmt")]
impl defmt::Format for AqiError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownPollutant =>
                defmt::write!(fmt, "Unknown pollutant identifier"),
        }
    }
}
