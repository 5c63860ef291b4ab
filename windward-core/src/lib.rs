//! Pulse-train telemetry aggregation for wind, rain and environment sensors
//!
//! Converts debounced pulse counts (anemometer rotations, rain bucket
//! tips) and raw vane angles into calibrated, time-windowed telemetry:
//! instantaneous speed, circular-mean direction, long-period averages and
//! peak gusts. Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - No heap allocation in the hot path
//! - Single cooperative scheduler, no locks
//! - All state wired at startup, process lifetime
//!
//! ```no_run
//! use windward_core::{StationBuilder, MemorySink};
//! use windward_core::config::{WindConfig, WindOutputs};
//!
//! let mut builder = StationBuilder::new();
//! let wind = builder
//!     .add_wind(&WindConfig::default(), &WindOutputs::default())
//!     .unwrap();
//!
//! let mut station = builder.build(MemorySink::<64>::new(), 0);
//!
//! // Interrupt hand-off delivers debounced edges:
//! station.pulse_wind(wind);
//!
//! // Scheduler callback drives all report windows:
//! station.tick(3000);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod accum;
pub mod config;
pub mod constants;
pub mod errors;
pub mod measurement;
pub mod station;
pub mod time;

// Public API
pub use accum::{
    CircularMeanAccumulator, GustAccumulator, LinearScaler, PulseCounter, WindowIntegrator,
};
pub use errors::{StationError, StationResult};
pub use measurement::{Measurement, MemorySink, Metadata, Sink, Value};
pub use station::{
    DirectionId, EnvironmentId, RainId, Station, StationBuilder, StationMetrics, WindId,
};
pub use time::{TimeSource, Timestamp};

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
