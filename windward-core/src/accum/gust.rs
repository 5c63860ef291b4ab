//! Windowed-maximum accumulator for gust detection
//!
//! ## Overview
//!
//! A gust is the single windiest short burst within a long reporting
//! period, not an average. This accumulator decouples the two cadences:
//! short sub-windows of a fixed number of pulse-count reports (e.g. 4
//! reports of 3 s = 12 s bursts) are summed and compared, and only the
//! maximum sub-window sum survives until the long-period reporter
//! consumes it.
//!
//! ```text
//! reports:    1  2  3  4 │ 10  0  0  0 │  1  1  1  1 │ ...
//! sub-sums:         10   │      10     │       4     │
//! retained max:     10 ──────→ 10 ─────────→ 10 ──────→ consume_max()
//! ```
//!
//! ## State machine
//!
//! The accumulator alternates between accumulating a sub-window and
//! closing it. Each report adds to the sub-window sum; when the report
//! count reaches the configured sub-window size, the sum is folded into
//! the retained maximum and the sub-window starts over. The maximum is
//! cleared only when consumed.

use super::LinearScaler;
use crate::errors::{StationError, StationResult};

/// Retains the maximum sub-window pulse sum within a reporting period
///
/// Invariants: the sub-window report count stays in
/// `[0, reports_per_subwindow)`; the retained maximum changes only at
/// sub-window boundaries and is cleared only by [`consume_max`].
///
/// [`consume_max`]: GustAccumulator::consume_max
#[derive(Debug, Clone)]
pub struct GustAccumulator {
    sub_sum: u32,
    sub_reports: u16,
    reports_per_subwindow: u16,
    max_sum: u32,
    scaler: LinearScaler,
}

impl GustAccumulator {
    /// Accumulator closing a sub-window every `reports_per_subwindow`
    /// reports, scaling consumed maxima with `scaler`
    pub fn new(reports_per_subwindow: u16, scaler: LinearScaler) -> StationResult<Self> {
        if reports_per_subwindow == 0 {
            return Err(StationError::InvalidSubWindow { reports: 0 });
        }

        Ok(Self {
            sub_sum: 0,
            sub_reports: 0,
            reports_per_subwindow,
            max_sum: 0,
            scaler,
        })
    }

    /// Feed one short-window pulse count
    ///
    /// Closes the sub-window when it reaches the configured size, folding
    /// its sum into the retained maximum.
    pub fn add_report(&mut self, count: u32) {
        self.sub_sum = self.sub_sum.saturating_add(count);
        self.sub_reports += 1;

        if self.sub_reports == self.reports_per_subwindow {
            if self.sub_sum > self.max_sum {
                self.max_sum = self.sub_sum;
            }
            self.sub_sum = 0;
            self.sub_reports = 0;
        }
    }

    /// Retained maximum in raw counts (not yet consumed)
    pub fn peak(&self) -> u32 {
        self.max_sum
    }

    /// Return the scaled maximum and clear it
    ///
    /// Called by the long-period reporter. If no sub-window has closed
    /// since the last call (or none ever closed), returns exactly `0.0`:
    /// the "no gust observed" signal, not an error. The scaler's offset is
    /// deliberately not applied to an empty period.
    pub fn consume_max(&mut self) -> f32 {
        let max = self.max_sum;
        self.max_sum = 0;

        if max == 0 {
            0.0
        } else {
            self.scaler.scale(max as f32)
        }
    }
}
