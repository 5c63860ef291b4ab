//! Error Types for Station Configuration and Delivery Failures
//!
//! ## Design Philosophy
//!
//! The error surface of this crate is deliberately narrow: the aggregation
//! core has no I/O and no parsing, so almost everything that can go wrong
//! goes wrong at wiring time. Errors follow the same rules as the rest of
//! the crate:
//!
//! 1. **Small Size**: every variant is a few bytes; errors may be returned
//!    from hot paths and stored without allocation.
//!
//! 2. **No Heap Allocation**: only inline data and `&'static str`, no
//!    `String`, deterministic memory usage.
//!
//! 3. **Copy Semantics**: errors implement `Copy` for cheap returns.
//!
//! Numeric edge cases (zero-sample circular mean, saturating pulse counts,
//! NaN propagation through scalers) are *not* errors: each has a defined,
//! documented deterministic output. See the `accum` module.

use thiserror_no_std::Error;

/// Result type for station operations
pub type StationResult<T> = Result<T, StationError>;

/// Station errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationError {
    /// Report window duration must be positive
    #[error("Report interval of {interval_ms} ms is not positive")]
    InvalidInterval {
        /// The rejected interval
        interval_ms: u32,
    },

    /// Gust sub-window must contain at least one report
    #[error("Gust sub-window of {reports} reports is empty")]
    InvalidSubWindow {
        /// The rejected sub-window size
        reports: u16,
    },

    /// Output path does not fit in the inline path buffer
    #[error("Output path exceeds {max} bytes")]
    PathTooLong {
        /// Maximum path length in bytes
        max: usize,
    },

    /// A fixed-capacity table is full
    #[error("Capacity exceeded: {resource}")]
    CapacityExceeded {
        /// Which table filled up
        resource: &'static str,
    },

    /// Downstream sink refused the measurement
    #[error("Sink rejected measurement")]
    SinkRejected,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInterval { interval_ms } =>
                defmt::write!(fmt, "Interval {} ms not positive", interval_ms),
            Self::InvalidSubWindow { reports } =>
                defmt::write!(fmt, "Sub-window of {} reports is empty", reports),
            Self::PathTooLong { max } =>
                defmt::write!(fmt, "Path exceeds {} bytes", max),
            Self::CapacityExceeded { resource } =>
                defmt::write!(fmt, "Capacity exceeded: {}", resource),
            Self::SinkRejected =>
                defmt::write!(fmt, "Sink rejected measurement"),
        }
    }
}
