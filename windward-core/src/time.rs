//! Time handling for the station core
//!
//! The station itself never owns a clock: every entry point (`tick`,
//! `pulse`, `direction_sample`, ...) takes the current timestamp as an
//! argument, so the host decides where time comes from. This module
//! provides the timestamp type and a small clock abstraction for hosts
//! and tests:
//! - System clock (when `std` is available)
//! - Monotonic counter (for interval timing, when `std` is available)
//! - Fixed/manual clock (for deterministic tests)

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Source of time for the host driving the station
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Monotonic time source using the process-local clock (requires std)
///
/// Starts at 0 on construction, always increases; immune to wall-clock
/// adjustments, which makes it the right driver for report intervals.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct MonotonicTime {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicTime {
    /// Clock anchored at the moment of construction
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for MonotonicTime {
    fn now(&self) -> Timestamp {
        self.start.elapsed().as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Manually-advanced time source for testing
///
/// Lets a test step the clock exactly one report window at a time and
/// observe which outputs fire on which boundary.
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a fixed clock starting at `timestamp`
    pub const fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Set the clock to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
