//! Periodic report window scheduling
//!
//! Each accumulator in a channel is paired with exactly one
//! [`ReportWindow`], and the channel's tick method is the only caller of
//! both: the window decides *when* to consume, the channel decides
//! *what*. That pairing is what delivers the exactly-once guarantee: a
//! window that fires produces exactly one read-and-reset of its
//! accumulator, and the single-threaded cooperative tick loop makes
//! overlapping consumption of the same accumulator structurally
//! impossible.

use crate::errors::{StationError, StationResult};
use crate::time::Timestamp;

/// Fixed reporting interval with due/advance bookkeeping
///
/// Created unarmed; the station arms all windows against the build
/// timestamp so the first report lands one full interval after startup.
#[derive(Debug, Clone)]
pub struct ReportWindow {
    interval_ms: u32,
    next_due: Timestamp,
}

impl ReportWindow {
    /// Window firing every `interval_ms` milliseconds
    ///
    /// A zero interval is rejected: it would mean a window that is always
    /// due and never accumulates.
    pub fn new(interval_ms: u32) -> StationResult<Self> {
        if interval_ms == 0 {
            return Err(StationError::InvalidInterval { interval_ms });
        }

        Ok(Self {
            interval_ms,
            next_due: 0,
        })
    }

    /// Configured interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Schedule the first firing one interval after `now`
    pub(crate) fn arm(&mut self, now: Timestamp) {
        self.next_due = now + self.interval_ms as u64;
    }

    /// Whether the window should fire at `now`
    pub(crate) fn due(&self, now: Timestamp) -> bool {
        now >= self.next_due
    }

    /// Schedule the next firing after a report was emitted
    ///
    /// Normally steps by exactly one interval so boundaries stay aligned
    /// to the start time. If the scheduler stalled past several intervals,
    /// the missed firings were already coalesced into the one report just
    /// emitted; realign to `now + interval` rather than firing a burst of
    /// back-to-back stale reports.
    pub(crate) fn advance(&mut self, now: Timestamp) {
        self.next_due += self.interval_ms as u64;
        if self.next_due <= now {
            self.next_due = now + self.interval_ms as u64;
        }
    }
}
