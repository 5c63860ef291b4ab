//! Saturating pulse counter for debounced edge events
//!
//! Counts one event per `on_edge()` call from an anemometer reed switch or
//! rain gauge tipping bucket. Edges are assumed already debounced (minimum
//! inter-edge spacing enforced upstream, see
//! [`crate::constants::MIN_EDGE_SPACING_MS`]) and already synchronized onto
//! the cooperative scheduler's thread; the interrupt-to-scheduler hand-off
//! is the host's responsibility.

use crate::constants::MAX_PULSES_PER_WINDOW;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Counts debounced pulses within one report window
///
/// The count saturates at a ceiling instead of wrapping: a fast-pulsing
/// electrical fault then reads back as the (implausible) ceiling rather
/// than masquerading as a plausible low value after wraparound.
#[derive(Debug, Clone)]
pub struct PulseCounter {
    count: u32,
    ceiling: u32,
}

impl PulseCounter {
    /// Counter with the default saturation ceiling
    pub const fn new() -> Self {
        Self::with_ceiling(MAX_PULSES_PER_WINDOW)
    }

    /// Counter with a custom saturation ceiling
    pub const fn with_ceiling(ceiling: u32) -> Self {
        Self { count: 0, ceiling }
    }

    /// Record one debounced edge
    ///
    /// Saturates at the configured ceiling; edges beyond it are dropped.
    pub fn on_edge(&mut self) {
        if self.count < self.ceiling {
            self.count += 1;
            if self.count == self.ceiling {
                log_warn!("pulse counter saturated at {} counts", self.ceiling);
            }
        }
    }

    /// Current count since the last emit
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Return the accumulated count and reset to zero
    ///
    /// Invoked exactly once per report window by the owning channel.
    pub fn emit_and_reset(&mut self) -> u32 {
        let count = self.count;
        self.count = 0;
        count
    }
}

impl Default for PulseCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_resets() {
        let mut counter = PulseCounter::new();
        assert_eq!(counter.count(), 0);

        for _ in 0..10 {
            counter.on_edge();
        }
        assert_eq!(counter.emit_and_reset(), 10);

        // Reset means a windowless second read yields zero
        assert_eq!(counter.emit_and_reset(), 0);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let mut counter = PulseCounter::with_ceiling(5);

        for _ in 0..100 {
            counter.on_edge();
        }
        assert_eq!(counter.emit_and_reset(), 5);

        // Counting resumes normally after the window is consumed
        counter.on_edge();
        assert_eq!(counter.emit_and_reset(), 1);
    }
}
